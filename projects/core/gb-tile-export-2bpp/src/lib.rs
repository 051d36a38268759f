//! Raw implementation of the Game Boy tile export.
//!
//! An indexed 4-colour image is sliced into 8x8 tiles, each tile is packed into the
//! Game Boy's planar 2bpp row format, and bit-identical tiles are removed. The result
//! is a [`TileSet`]: the table of unique tiles plus a tilemap that rebuilds the image.
//!
//! ```
//! use gb_tile_export_2bpp::{encode, PixelGrid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Two side by side tiles, both fully coloured with index 3.
//! let grid = PixelGrid::new(16, 8, vec![3; 16 * 8])?;
//! let tiles = encode(&grid);
//!
//! assert_eq!(tiles.metadata().unique_tile_count, 1);
//! assert_eq!(tiles.map().indices().collect::<Vec<_>>(), [0, 0]);
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod bitplane;
pub mod constants;
pub mod dedup;
pub mod encode;
pub mod extract;
pub mod grid;

pub use bitplane::{encode_row, encode_tile, EncodedTile};
pub use dedup::{deduplicate, Deduplicated, TileClass, TileMap};
pub use encode::{encode, TileSet, TileSetMetadata};
pub use extract::{extract_tiles, RawTile};
pub use grid::{GridError, PixelGrid};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
