//! Error types for tile export operations.

use crate::options::{ASSET_NAME_MAX, BANK_MAX};
use gb_tile_export_2bpp::GridError;
use thiserror::Error;

/// Errors that can occur while preparing a tile export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileExportError {
    /// The pixel data is not a valid export input.
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] GridError),

    /// No asset name was given.
    #[error("The asset name can not be empty.")]
    EmptyAssetName,

    /// The asset name is longer than [`ASSET_NAME_MAX`] bytes.
    #[error("Asset name '{name}' is {len} bytes long, the maximum is {max}.", len = .name.len(), max = ASSET_NAME_MAX)]
    AssetNameTooLong {
        /// The rejected name.
        name: String,
    },

    /// The asset name can not be used as a C identifier.
    #[error("Asset name '{0}' is not a valid C identifier (letters, digits and '_', not starting with a digit).")]
    InvalidAssetName(String),

    /// The ROM bank number is above [`BANK_MAX`].
    #[error("ROM bank {0} is out of range, the last available bank is {max}.", max = BANK_MAX)]
    InvalidBank(u32),
}
