#![warn(missing_docs)]

//! Output formats for Game Boy tile assets.
//!
//! Two emitters are provided, both implementing [`AssetEmitter`]:
//!
//! - [`GbdkEmitter`]: C header and source for GBDK-2020 projects
//! - [`BinaryEmitter`]: raw `.2bpp` tile data and a one byte per entry `.tilemap`
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gb_tile_export_2bpp_api::TileExportBuilder;
//! use gb_tile_export_gbdk::write_gbdk_files;
//! use std::path::Path;
//!
//! let pixels = vec![0u8; 160 * 144];
//! let asset = TileExportBuilder::new()
//!     .asset_name("Title")
//!     .export_indices(160, 144, &pixels)?;
//!
//! let (header, source) = write_gbdk_files(&asset, Path::new("res"))?;
//! println!("wrote {} and {}", header.display(), source.display());
//! # Ok(())
//! # }
//! ```

pub mod binary;
pub mod emitter;
pub mod error;
pub mod gbdk;

pub use binary::{tile_data_bytes, tilemap_bytes, write_binary_files, BinaryEmitter};
pub use emitter::AssetEmitter;
pub use error::{EmitError, EmitResult};
pub use gbdk::{render_header, render_source, write_gbdk_files, GbdkEmitter};

#[cfg(test)]
pub(crate) mod test_prelude;
