//! 32×32 cell matrix
//!
//! [`Grid`] backs both the working grid that arithmetic instructions write to
//! and the screen that the commit instruction copies into. It is `Copy`, so a
//! committed frame handed to the display is always an independent snapshot.

use super::cursor::Cursor;
use super::{wrap_add, wrap_sub, Cell};
use crate::interpreter::constants::{GRID_SIZE, INITIAL_SCREEN_CELL};

/// A 32×32 matrix of cell values, stored row by row (`cells[y][x]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An all-zero grid, the initial state of the working grid
    pub fn new() -> Self {
        Self::filled(0)
    }

    /// A grid with every cell set to `value` (reduced modulo 32)
    pub fn filled(value: Cell) -> Self {
        Grid {
            cells: [[wrap_add(value, 0); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// The initial screen: every cell holds the light blue palette slot
    pub fn initial_screen() -> Self {
        Self::filled(INITIAL_SCREEN_CELL)
    }

    /// Value of the cell at (`x`, `y`); coordinates wrap modulo 32
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y % GRID_SIZE][x % GRID_SIZE]
    }

    /// Value of the cell under `cursor`
    pub fn at(&self, cursor: Cursor) -> Cell {
        self.get(cursor.x as usize, cursor.y as usize)
    }

    /// Overwrite the cell under `cursor`, reducing `value` modulo 32
    pub fn set(&mut self, cursor: Cursor, value: Cell) {
        self.cells[cursor.y as usize][cursor.x as usize] = wrap_add(value, 0);
    }

    /// Add `n` to the cell under `cursor`
    pub fn add(&mut self, cursor: Cursor, n: u8) {
        let value = wrap_add(self.at(cursor), n);
        self.set(cursor, value);
    }

    /// Subtract `n` from the cell under `cursor`
    pub fn sub(&mut self, cursor: Cursor, n: u8) {
        let value = wrap_sub(self.at(cursor), n);
        self.set(cursor, value);
    }

    /// Copy the cell under `cursor` from `source` into this grid
    pub fn copy_cell_from(&mut self, source: &Grid, cursor: Cursor) {
        self.set(cursor, source.at(cursor));
    }

    /// Rows from top (y = 0) to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Every cell value in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
