//! Board constants and runtime configuration defaults

// Board defaults
/// Default number of board rows
pub const DEFAULT_ROWS: usize = 16;
/// Default number of board columns
pub const DEFAULT_COLS: usize = 32;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum collapse steps before stopping
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

// Render geometry; margin, pipe width, and padding derive from the cell size
/// Edge length of a rendered cell in pixels for PNG export
pub const CELL_SIZE: u32 = 32;
/// Edge length of a rendered cell in pixels for GIF frames
pub const GIF_CELL_SIZE: u32 = 8;

// Grayscale render palette (RGBA)
/// Board background color
pub const BOARD_BACKGROUND_COLOR: [u8; 4] = [24, 24, 24, 255];
/// Cell background color
pub const CELL_BACKGROUND_COLOR: [u8; 4] = [32, 32, 32, 255];
/// Pipe segment color
pub const PIPE_COLOR: [u8; 4] = [128, 128, 128, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to visualization filenames
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
