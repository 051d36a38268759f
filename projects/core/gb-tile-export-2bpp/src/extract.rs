//! Slicing a [`PixelGrid`] into 8x8 tiles.

use crate::constants::TILE_SIZE;
use crate::grid::PixelGrid;

/// The palette indices of a single 8x8 block of the image, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTile(pub [[u8; TILE_SIZE]; TILE_SIZE]);

impl RawTile {
    /// Returns the 8 palette indices of pixel row `row` (0 = top).
    #[inline]
    pub fn row(&self, row: usize) -> &[u8; TILE_SIZE] {
        &self.0[row]
    }

    /// Iterates over the 8 pixel rows of the tile, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u8; TILE_SIZE]> {
        self.0.iter()
    }

    /// Iterates over all 64 palette indices in row-major order.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().flatten().copied()
    }
}

/// Slices the grid into tiles in row-major tile order.
///
/// The tile at tile row `row` and tile column `col` is returned at index
/// `row * grid.tile_width() + col`; the iterator always yields exactly
/// [`PixelGrid::tile_count`] tiles.
pub fn extract_tiles(grid: &PixelGrid) -> impl ExactSizeIterator<Item = RawTile> + '_ {
    let tile_width = grid.tile_width();
    (0..grid.tile_count()).map(move |tile| {
        let origin_x = (tile % tile_width) * TILE_SIZE;
        let origin_y = (tile / tile_width) * TILE_SIZE;

        let mut raw = [[0u8; TILE_SIZE]; TILE_SIZE];
        for (y, dest) in raw.iter_mut().enumerate() {
            dest.copy_from_slice(&grid.row(origin_y + y)[origin_x..origin_x + TILE_SIZE]);
        }

        RawTile(raw)
    })
}
