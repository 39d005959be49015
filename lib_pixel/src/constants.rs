pub const FORMAT_NAME: &str = "Pixel Grid";
pub const FILE_EXT: &str = "json";

/// Side length a fresh canvas starts with.
pub const DEFAULT_GRID_SIZE: u32 = 16;

// Range offered by the size control. The model itself accepts any size >= 1.
pub const MIN_GRID_SIZE: u32 = 8;
pub const MAX_GRID_SIZE: u32 = 64;

/// Largest grid a file may describe. Bigger files are rejected before
/// any cells are allocated.
pub const MAX_FILE_GRID_SIZE: u32 = 4096;
