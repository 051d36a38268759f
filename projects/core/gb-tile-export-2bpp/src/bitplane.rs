//! Planar 2bpp packing of tiles in the Game Boy's native layout.
//!
//! Every pixel row of a tile is stored as two bytes ("bit planes"). The first byte
//! holds bit 0 of each pixel's palette index, the second byte holds bit 1. Within
//! each plane the leftmost pixel occupies the most significant bit.
//!
//! ```text
//! indices:     1  0  3  0  2  1  0  3
//! low plane:   1  0  1  0  0  1  0  1   => 0xA5
//! high plane:  0  0  1  0  1  0  0  1   => 0x29
//! row word:    0xA529
//! ```
//!
//! A row is represented here as a single [`u16`] with the low plane in the upper
//! byte, so the row word written out big-endian gives the bytes in hardware order.

use crate::constants::{TILE_BYTES, TILE_SIZE};
use crate::extract::RawTile;

/// A tile packed in the hardware's planar 2bpp format.
///
/// Two tiles are the same tile if and only if all 8 row words are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncodedTile {
    /// One word per pixel row, top to bottom: `(low_plane << 8) | high_plane`.
    pub rows: [u16; TILE_SIZE],
}

impl EncodedTile {
    /// Creates a tile from its 8 row words.
    #[inline]
    pub const fn from_rows(rows: [u16; TILE_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns the 16 bytes of this tile in the order the hardware reads them:
    /// for each row, the low plane byte followed by the high plane byte.
    #[inline]
    pub fn to_bytes(&self) -> [u8; TILE_BYTES] {
        let mut bytes = [0u8; TILE_BYTES];
        for (dest, row) in bytes.chunks_exact_mut(2).zip(self.rows) {
            dest.copy_from_slice(&row.to_be_bytes());
        }
        bytes
    }
}

/// Packs the 8 palette indices of one pixel row into a row word.
///
/// For the pixel in column `c` (0 = leftmost), bit 0 of the index is placed at bit
/// `7 - c` of the upper byte and bit 1 of the index at bit `7 - c` of the lower byte.
/// Only the two lowest bits of each index are read.
#[inline]
pub fn encode_row(row: &[u8; TILE_SIZE]) -> u16 {
    let mut low_plane = 0u8;
    let mut high_plane = 0u8;

    for (col, &index) in row.iter().enumerate() {
        let shift = 7 - col;
        low_plane |= (index & 0b01) << shift;
        high_plane |= ((index >> 1) & 0b01) << shift;
    }

    ((low_plane as u16) << 8) | high_plane as u16
}

/// Packs a whole tile, row by row.
#[inline]
pub fn encode_tile(tile: &RawTile) -> EncodedTile {
    EncodedTile::from_rows(tile.0.map(|row| encode_row(&row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case([0, 0, 0, 0, 0, 0, 0, 0], 0x0000)]
    #[case([3, 3, 3, 3, 3, 3, 3, 3], 0xFFFF)]
    #[case([1, 1, 1, 1, 1, 1, 1, 1], 0xFF00)]
    #[case([2, 2, 2, 2, 2, 2, 2, 2], 0x00FF)]
    #[case([0, 1, 2, 3, 0, 1, 2, 3], 0x5533)]
    #[case([1, 0, 3, 0, 2, 1, 0, 3], 0xA529)]
    #[case([3, 0, 0, 0, 0, 0, 0, 0], 0x8080)]
    #[case([0, 0, 0, 0, 0, 0, 0, 2], 0x0001)]
    fn packs_known_rows(#[case] row: [u8; 8], #[case] expected: u16) {
        assert_eq!(
            encode_row(&row),
            expected,
            "row {row:?} should pack to {expected:#06X}"
        );
    }

    #[test]
    fn packing_is_lossless_for_every_index_and_column() {
        for index in 0..4u8 {
            for col in 0..TILE_SIZE {
                let mut row = [0u8; TILE_SIZE];
                row[col] = index;

                let word = encode_row(&row);
                assert_eq!(
                    decode_row(word)[col],
                    index,
                    "index {index} at column {col} did not survive packing"
                );
            }
        }
    }

    #[test]
    fn every_row_decodes_to_its_source() {
        // Exhaustive over all 4^8 possible rows.
        for packed in 0..=u16::MAX {
            let row: [u8; TILE_SIZE] = core::array::from_fn(|col| ((packed >> (col * 2)) & 3) as u8);
            assert_eq!(decode_row(encode_row(&row)), row);
        }
    }

    #[test]
    fn packs_whole_tile_row_by_row() {
        let mut raw = [[0u8; TILE_SIZE]; TILE_SIZE];
        raw[0] = [1, 0, 3, 0, 2, 1, 0, 3];
        raw[7] = [3; TILE_SIZE];

        let tile = encode_tile(&RawTile(raw));
        assert_eq!(tile.rows, [0xA529, 0, 0, 0, 0, 0, 0, 0xFFFF]);
    }

    #[test]
    fn bytes_are_low_plane_first() {
        let tile = EncodedTile::from_rows([0xA529, 0x5533, 0, 0, 0, 0, 0, 0xFF00]);
        let bytes = tile.to_bytes();

        assert_eq!(&bytes[..4], &[0xA5, 0x29, 0x55, 0x33]);
        assert_eq!(&bytes[14..], &[0xFF, 0x00]);
    }
}
