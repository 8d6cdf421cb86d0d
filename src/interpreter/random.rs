//! Cell sources for the `?` instruction

use crate::interpreter::constants::CELL_MODULUS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the value written by `?`
pub trait CellSource {
    /// Next cell value, in `0..32`
    fn next_cell(&mut self) -> u8;
}

/// Uniform draws over `0..32` from any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RandomCells<R> {
    rng: R,
}

impl<R: Rng> RandomCells<R> {
    pub fn new(rng: R) -> Self {
        RandomCells { rng }
    }
}

impl RandomCells<StdRng> {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CellSource for RandomCells<R> {
    fn next_cell(&mut self) -> u8 {
        self.rng.gen_range(0..CELL_MODULUS)
    }
}

/// Replays a fixed list of values, cycling when it runs out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedCells {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedCells {
    /// Values are reduced modulo 32. An empty script always yields 0.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        ScriptedCells {
            values: values.into_iter().map(|v| v % CELL_MODULUS).collect(),
            next: 0,
        }
    }
}

impl CellSource for ScriptedCells {
    fn next_cell(&mut self) -> u8 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
