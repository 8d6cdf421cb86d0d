//! Loom source parser
//!
//! This module turns raw program text into a validated [`Program`]:
//! - [`normalize`]: whitespace and comment stripping (source text → canonical text)
//! - [`brackets`]: static opener ↔ closer matching for the three bracket families
//! - [`repeat`]: repeat-count scanning for the six repeatable operators
//! - [`parse`]: the [`Program`] type and [`ParseError`]
//!
//! # Canonical Text
//!
//! Canonical text contains only the reserved alphabet
//! (`> < ^ v + - ? o x . * [ ] { } ( )`) plus decimal digits, and digits only
//! ever follow a repeatable operator or another digit. Normalizing canonical
//! text again returns it unchanged.
//!
//! Repeat counts are not folded into instructions ahead of time: the engine
//! scans them at dispatch, so program counters and breakpoint reports refer to
//! positions in the canonical text the author can inspect.

pub mod brackets;
pub mod normalize;
pub mod parse;
pub mod repeat;

pub use brackets::{BracketIndex, Family};
pub use parse::{ParseError, Program};
