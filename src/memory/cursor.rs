//! Cursor position on the grid

use super::{wrap_add, wrap_sub};
use std::fmt;

/// The (x, y) position used by every grid instruction.
///
/// Both coordinates stay in `0..32`; moving off one edge re-enters from the
/// opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Cursor {
    pub x: u8,
    pub y: u8,
}

impl Cursor {
    /// The home position (0, 0)
    pub const ORIGIN: Cursor = Cursor { x: 0, y: 0 };

    /// Create a cursor, reducing both coordinates modulo 32
    pub fn new(x: u8, y: u8) -> Self {
        Cursor {
            x: wrap_add(x, 0),
            y: wrap_add(y, 0),
        }
    }

    /// `>`: move right by `n`
    pub fn right(&mut self, n: u8) {
        self.x = wrap_add(self.x, n);
    }

    /// `<`: move left by `n`
    pub fn left(&mut self, n: u8) {
        self.x = wrap_sub(self.x, n);
    }

    /// `v`: move down by `n`
    pub fn down(&mut self, n: u8) {
        self.y = wrap_add(self.y, n);
    }

    /// `^`: move up by `n`
    pub fn up(&mut self, n: u8) {
        self.y = wrap_sub(self.y, n);
    }

    /// `o`: return to the origin
    pub fn home(&mut self) {
        *self = Cursor::ORIGIN;
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_on_every_edge() {
        let mut cursor = Cursor::ORIGIN;
        cursor.left(1);
        cursor.up(1);
        assert_eq!(cursor, Cursor::new(31, 31));

        cursor.right(1);
        cursor.down(1);
        assert_eq!(cursor, Cursor::ORIGIN);
    }

    #[test]
    fn test_full_lap_is_no_movement() {
        let mut cursor = Cursor::new(7, 9);
        cursor.right(32);
        cursor.down(32);
        assert_eq!(cursor, Cursor::new(7, 9));
    }

    #[test]
    fn test_home() {
        let mut cursor = Cursor::new(17, 3);
        cursor.home();
        assert_eq!(cursor, Cursor::ORIGIN);
        assert_eq!(cursor.to_string(), "(0, 0)");
    }
}
