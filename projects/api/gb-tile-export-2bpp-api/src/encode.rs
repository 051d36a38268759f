//! Encoding entry points that accept untrusted input.

use crate::error::TileExportError;
use gb_tile_export_2bpp::{encode, PixelGrid, TileSet};
use tracing::debug;

/// Validates a raw palette index buffer and encodes it.
///
/// # Parameters
///
/// - `width`, `height`: Image dimensions in pixels; multiples of 8 in `8..=256`
/// - `pixels`: Row-major palette indices, `width * height` bytes, each `0..=3`
///
/// # Errors
///
/// [`TileExportError::InvalidImage`] if the buffer does not describe a valid image.
pub fn encode_indices(
    width: usize,
    height: usize,
    pixels: &[u8],
) -> Result<TileSet, TileExportError> {
    let grid = PixelGrid::new(width, height, pixels.to_vec())?;
    debug!(width, height, "validated pixel grid");
    Ok(encode_grid(&grid))
}

/// Encodes a grid that has already been validated.
///
/// This cannot fail; the budget overflow is reported through
/// [`TileSetMetadata::exceeds_tile_budget`](gb_tile_export_2bpp::TileSetMetadata::exceeds_tile_budget).
#[inline]
pub fn encode_grid(grid: &PixelGrid) -> TileSet {
    encode(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb_tile_export_2bpp::GridError;

    #[test]
    fn encodes_valid_buffer() {
        let pixels: Vec<u8> = (0..128).map(|i| ((i % 16) / 8 * 3) as u8).collect();
        let tiles = encode_indices(16, 8, &pixels).unwrap();

        // Left tile all 0, right tile all 3.
        assert_eq!(tiles.metadata().unique_tile_count, 2);
        assert_eq!(tiles.table()[0].rows, [0x0000; 8]);
        assert_eq!(tiles.table()[1].rows, [0xFFFF; 8]);
    }

    #[test]
    fn rejects_short_buffer() {
        assert_eq!(
            encode_indices(8, 16, &[0; 64]).unwrap_err(),
            TileExportError::InvalidImage(GridError::PixelCountMismatch {
                expected: 128,
                actual: 64
            })
        );
    }
}
