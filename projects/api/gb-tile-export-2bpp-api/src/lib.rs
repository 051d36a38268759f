#![warn(missing_docs)]

//! Safe, high-level API for exporting Game Boy tile assets.
//!
//! This crate wraps the raw pipeline in `gb-tile-export-2bpp` with validation of
//! untrusted input (raw palette index buffers) and of the export options an asset is
//! written with (asset name, ROM bank). The resulting [`TileAsset`] is what emitters
//! consume.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gb_tile_export_2bpp_api::TileExportBuilder;
//!
//! let pixels = vec![0u8; 16 * 8]; // two blank tiles
//! let asset = TileExportBuilder::new()
//!     .asset_name("Title")
//!     .bank(2)
//!     .export_indices(16, 8, &pixels)?;
//!
//! assert_eq!(asset.file_stem(), "title");
//! assert_eq!(asset.tiles().metadata().unique_tile_count, 1);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod asset;
pub mod builder;
pub mod encode;
pub mod error;
pub mod options;

// Re-export main functionality at crate root
pub use asset::TileAsset;
pub use builder::TileExportBuilder;
pub use encode::{encode_grid, encode_indices};
pub use error::TileExportError;
pub use options::{ExportOptions, ASSET_NAME_MAX, BANK_MAX};

// Re-export the core types that appear in this crate's signatures.
pub use gb_tile_export_2bpp::{
    constants, EncodedTile, GridError, PixelGrid, TileClass, TileMap, TileSet, TileSetMetadata,
};
