//! Memory model for the Loom interpreter
//!
//! This module provides the two-dimensional state a program manipulates:
//! - [`grid`]: a 32×32 matrix of cell values, used both for the working grid
//!   and for the screen that is presented to the display
//! - [`cursor`]: the (x, y) position every grid instruction operates on
//!
//! # Modular Arithmetic
//!
//! Cell values and cursor coordinates all live in `0..32`. Every mutation goes
//! through [`wrap_add`] and [`wrap_sub`], so overflow and negative results are
//! defined behavior rather than errors:
//! ```text
//! 31 + 1  →  0
//!  0 - 1  →  31
//! ```

pub mod cursor;
pub mod grid;

use crate::interpreter::constants::CELL_MODULUS;

/// A single cell value, always in `0..32`
pub type Cell = u8;

/// Add `n` to `value` modulo 32
pub fn wrap_add(value: u8, n: u8) -> u8 {
    ((value % CELL_MODULUS) + (n % CELL_MODULUS)) % CELL_MODULUS
}

/// Subtract `n` from `value` modulo 32, normalized to be non-negative
pub fn wrap_sub(value: u8, n: u8) -> u8 {
    ((value % CELL_MODULUS) + CELL_MODULUS - (n % CELL_MODULUS)) % CELL_MODULUS
}
