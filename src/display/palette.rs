//! The fixed 32-color palette
//!
//! Cell values are palette indices. The order is part of the language: a
//! program that writes 8 into a cell means red, whatever display shows it.

use crate::interpreter::constants::CELL_MODULUS;

/// One palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

const fn swatch(name: &'static str, r: u8, g: u8, b: u8) -> Swatch {
    Swatch { name, rgb: (r, g, b) }
}

pub const PALETTE: [Swatch; 32] = [
    swatch("black", 0, 0, 0),
    swatch("warm white", 255, 241, 232),
    swatch("dark blue", 29, 43, 83),
    swatch("dark purple", 126, 37, 83),
    swatch("dark green", 0, 135, 81),
    swatch("brown", 171, 82, 54),
    swatch("dark gray", 95, 87, 79),
    swatch("light gray", 194, 195, 199),
    swatch("red", 255, 0, 77),
    swatch("orange", 255, 163, 0),
    swatch("yellow", 255, 236, 39),
    swatch("green", 0, 228, 54),
    swatch("light blue", 41, 173, 255),
    swatch("blue", 129, 118, 171),
    swatch("light purple", 255, 119, 168),
    swatch("peach", 255, 204, 170),
    swatch("dark brown", 41, 24, 20),
    swatch("navy", 17, 29, 53),
    swatch("deep purple", 66, 33, 54),
    swatch("teal", 18, 83, 89),
    swatch("rust red", 116, 47, 41),
    swatch("muted purple", 73, 51, 59),
    swatch("warm gray", 162, 136, 121),
    swatch("pale lime", 243, 239, 125),
    swatch("dark pink", 190, 18, 80),
    swatch("orange-red", 255, 108, 36),
    swatch("lime green", 168, 231, 46),
    swatch("emerald green", 0, 181, 67),
    swatch("cobalt blue", 6, 90, 181),
    swatch("dusky purple", 117, 70, 101),
    swatch("coral", 255, 110, 89),
    swatch("white", 255, 255, 255),
];

/// Palette entry for a cell value (reduced modulo 32)
pub fn swatch_for(cell: u8) -> &'static Swatch {
    &PALETTE[(cell % CELL_MODULUS) as usize]
}

/// RGB triple for a cell value (reduced modulo 32)
pub fn rgb(cell: u8) -> (u8, u8, u8) {
    swatch_for(cell).rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_colors() {
        assert_eq!(rgb(0), (0, 0, 0));
        assert_eq!(rgb(12), (41, 173, 255));
        assert_eq!(swatch_for(12).name, "light blue");
        assert_eq!(rgb(31), (255, 255, 255));
    }

    #[test]
    fn test_order_by_name() {
        let names: Vec<&str> = PALETTE.iter().map(|s| s.name).collect();
        assert_eq!(names[8], "red");
        assert_eq!(names[19], "teal");
        assert_eq!(names[30], "coral");
    }

    #[test]
    fn test_wraps() {
        assert_eq!(rgb(32), rgb(0));
        assert_eq!(rgb(44), rgb(12));
    }
}
