// Constants for the Loom interpreter

/// Width and height of the grid and the screen, in cells
pub const GRID_SIZE: usize = 32;

/// Number of distinct cell values; every cell and coordinate is reduced modulo this
pub const CELL_MODULUS: u8 = 32;

/// Palette slot every screen cell starts with (light blue), so the startup canvas is not black
pub const INITIAL_SCREEN_CELL: u8 = 12;

/// How many dispatched instructions pass between two quit polls of the display sink
pub const QUIT_POLL_INTERVAL: u64 = 4096;
