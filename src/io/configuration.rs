//! Generation constants and runtime configuration defaults

/// Grid width used when none is given
pub const DEFAULT_WIDTH: usize = 20;

// Below this the 4-way start tile would touch the boundary
/// Smallest accepted grid width
pub const MIN_WIDTH: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid width
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Placed tile count a map must reach to be accepted
pub const DEFAULT_MIN_SIZE: usize = 35;

/// Generation attempts before the size guard gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Number of maps generated per run
pub const DEFAULT_MAP_COUNT: usize = 1;

// Each tile is drawn as a 3x3 pattern, then scaled up
/// Pixels per pattern cell in PNG and GIF output
pub const DEFAULT_PIXEL_SCALE: u32 = 4;

// Keeps a single RGBA frame under 1 GiB
/// Largest side in pixels of PNG and GIF output
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Stem used for generated map files
pub const OUTPUT_STEM: &str = "map";
/// Extension of the text dump
pub const TEXT_EXTENSION: &str = "txt";
/// Suffix added to visualization filenames
pub const VISUALIZATION_SUFFIX: &str = "_growth";
/// Grid cells above which growth capture records every n-th step only
pub const MAX_CAPTURED_FRAMES: usize = 2_000;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// RGBA colors for rendered maps
/// Background color of image output
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Pipe color of image output
pub const PIPE_COLOR: [u8; 4] = [222, 222, 222, 255];
/// Color of the seed tile in image output
pub const START_COLOR: [u8; 4] = [230, 120, 40, 255];
