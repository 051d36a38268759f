//! Hardware and input limits shared by the whole pipeline.

/// Size of a tile, in pixels (any dimension).
pub const TILE_SIZE: usize = 8;

/// Number of pixels in a single tile.
pub const TILE_PIXELS: usize = TILE_SIZE * TILE_SIZE;

/// Size of an encoded tile in the hardware format, in bytes (2 bytes per row).
pub const TILE_BYTES: usize = TILE_SIZE * 2;

/// Minimum accepted image size, in pixels (any dimension).
pub const IMAGE_SIZE_MIN: usize = TILE_SIZE;

/// Maximum accepted image size, in pixels (any dimension).
pub const IMAGE_SIZE_MAX: usize = 256;

/// Number of colours in the palette of an accepted image.
pub const PALETTE_COLORS: u8 = 4;

/// Upper bound on the number of tiles in a single image (32x32 tiles).
pub const MAX_TILE_COUNT: usize = (IMAGE_SIZE_MAX / TILE_SIZE) * (IMAGE_SIZE_MAX / TILE_SIZE);

/// How many unique tiles fit in the Game Boy's video memory at the same time.
///
/// Exceeding this does not fail the export, see
/// [`TileSetMetadata::exceeds_tile_budget`](crate::TileSetMetadata::exceeds_tile_budget).
pub const VRAM_TILE_BUDGET: usize = 256;
