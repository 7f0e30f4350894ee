//! Cell alphabet, search pattern and runtime configuration defaults

// Cell alphabet shared by tiles, composites and patterns
/// Cell value of an active pixel
pub const ACTIVE_CELL: u8 = b'#';
/// Cell value of a background pixel
pub const BACKGROUND_CELL: u8 = b'.';
/// Cell value written over active pixels consumed by a pattern occurrence
pub const CONSUMED_CELL: u8 = b'O';

/// Rows of the default search pattern; `#` marks cells that must be active
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// A tile needs at least one interior cell once its border is stripped
/// Minimum tile side length
pub const MIN_TILE_SIDE: usize = 3;

/// Prefix of every tile header line (`Tile 2311:`)
pub const TILE_HEADER_PREFIX: &str = "Tile";

// Input discovery
/// Extension of input files picked up when the target is a directory
pub const INPUT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// Fixed seed for reproducible puzzle scrambling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to exported composite image filenames
pub const IMAGE_SUFFIX: &str = "_image";
/// Pixels per cell edge in exported images
pub const PIXEL_SCALE: u32 = 4;
/// Export colour of background cells
pub const BACKGROUND_COLOR: [u8; 4] = [16, 38, 64, 255];
/// Export colour of active cells left after pattern erasure
pub const ACTIVE_COLOR: [u8; 4] = [96, 170, 220, 255];
/// Export colour of cells consumed by pattern occurrences
pub const CONSUMED_COLOR: [u8; 4] = [240, 200, 40, 255];
