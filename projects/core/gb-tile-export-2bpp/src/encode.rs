//! The full export pipeline: extraction, packing and deduplication.

use crate::bitplane::{encode_tile, EncodedTile};
use crate::constants::VRAM_TILE_BUDGET;
use crate::dedup::{deduplicate, TileMap};
use crate::extract::extract_tiles;
use crate::grid::PixelGrid;
use tracing::{debug, warn};

/// Summary numbers describing an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSetMetadata {
    /// Width of the image, in tiles.
    pub tile_width: usize,
    /// Height of the image, in tiles.
    pub tile_height: usize,
    /// Number of tiles left after removing duplicates.
    pub unique_tile_count: usize,
    /// Number of tiles in the image, duplicates included.
    pub tile_count_total: usize,
    /// Set when `unique_tile_count` is above [`VRAM_TILE_BUDGET`].
    ///
    /// This is advisory only; the tile set is complete and valid either way, but the
    /// hardware will not be able to hold all of its tiles at once.
    pub exceeds_tile_budget: bool,
}

impl TileSetMetadata {
    /// Width of the image, in pixels.
    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.tile_width * crate::constants::TILE_SIZE
    }

    /// Height of the image, in pixels.
    #[inline]
    pub fn pixel_height(&self) -> usize {
        self.tile_height * crate::constants::TILE_SIZE
    }

    /// Number of positions that reuse an earlier tile.
    #[inline]
    pub fn duplicate_count(&self) -> usize {
        self.tile_count_total - self.unique_tile_count
    }
}

/// The result of encoding an image: unique tiles, tilemap and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    table: Vec<EncodedTile>,
    map: TileMap,
    metadata: TileSetMetadata,
}

impl TileSet {
    /// The unique tiles, in order of first occurrence.
    #[inline]
    pub fn table(&self) -> &[EncodedTile] {
        &self.table
    }

    /// The tilemap, one entry per tile position in row-major order.
    #[inline]
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Dimensions and tile counts.
    #[inline]
    pub fn metadata(&self) -> &TileSetMetadata {
        &self.metadata
    }

    /// Consumes the tile set, returning the table and the tilemap.
    pub fn into_parts(self) -> (Vec<EncodedTile>, TileMap, TileSetMetadata) {
        (self.table, self.map, self.metadata)
    }
}

/// Encodes an image into its unique 2bpp tiles and tilemap.
///
/// Tiles are taken in row-major order, packed with [`encode_tile`], and deduplicated
/// with [`deduplicate`]. All buffers are sized to the tile count of `grid` and owned by
/// the returned [`TileSet`].
///
/// A unique tile count above [`VRAM_TILE_BUDGET`] is reported through
/// [`TileSetMetadata::exceeds_tile_budget`] (and a warning event), never as an error.
pub fn encode(grid: &PixelGrid) -> TileSet {
    let encoded: Vec<EncodedTile> = extract_tiles(grid).map(|raw| encode_tile(&raw)).collect();
    let deduplicated = deduplicate(&encoded);

    let metadata = TileSetMetadata {
        tile_width: grid.tile_width(),
        tile_height: grid.tile_height(),
        unique_tile_count: deduplicated.table.len(),
        tile_count_total: encoded.len(),
        exceeds_tile_budget: deduplicated.table.len() > VRAM_TILE_BUDGET,
    };

    debug!(
        width = grid.width(),
        height = grid.height(),
        unique = metadata.unique_tile_count,
        total = metadata.tile_count_total,
        "encoded tile set"
    );

    if metadata.exceeds_tile_budget {
        warn!(
            unique = metadata.unique_tile_count,
            budget = VRAM_TILE_BUDGET,
            "image has more unique tiles than fit in video memory at the same time"
        );
    }

    TileSet {
        table: deduplicated.table,
        map: TileMap::new(deduplicated.classes, grid.tile_width()),
        metadata,
    }
}
