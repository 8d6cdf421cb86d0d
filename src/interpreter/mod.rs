//! Loom execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`] and instruction dispatch
//! - [`errors`]: runtime error types
//! - [`config`]: pacing, seeding and step limits
//! - [`random`]: value sources for `?`
//! - [`constants`]: grid dimensions and initial values
//!
//! # Execution Model
//!
//! The interpreter walks the canonical text one instruction at a time with a
//! program counter. Repeatable operators consume their whole repeat run in a
//! single step. Loops jump through the bracket index computed at parse time.
//! Nothing is drawn except by `x`, which hands a copy of the screen to the
//! [`crate::display::DisplaySink`].

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
mod loops;
pub mod random;
