//! # Introduction
//!
//! Loom is a small esoteric language in the tape-machine tradition, turned
//! sideways: instead of a tape, programs drive a cursor over a 32×32 grid of
//! cells, and instead of printing bytes they paint a 32×32 canvas from a
//! fixed 32-color palette.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Normalizer → Canonical text → Bracket index → Interpreter ↔ Grid → DisplaySink
//! ```
//!
//! 1. [`parser`] — strips whitespace and comments, validates brackets, and
//!    scans repeat counts.
//! 2. [`interpreter`] — dispatches one canonical instruction at a time.
//! 3. [`memory`] — the working [`memory::grid::Grid`], the screen, and the
//!    [`memory::cursor::Cursor`].
//! 4. [`display`] — the [`display::DisplaySink`] contract, the palette, and a
//!    headless recording sink.
//! 5. [`ui`] — ratatui canvas implementing the sink; not part of the stable
//!    library API.
//! 6. [`host`] — loads program text and wires a run together.
//!
//! ## Instructions
//!
//! `> < v ^` move the cursor, `+ -` change the cell under it (all six take an
//! optional repeat count, `+12`), `?` randomizes the cell, `.` clears it,
//! `o` homes the cursor, `x` commits the cell to the screen, `*` reports a
//! breakpoint, and `[] {} ()` loop while the cell is non-zero. Text between
//! single quotes and every other character is a comment.

pub mod display;
pub mod host;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod ui;
