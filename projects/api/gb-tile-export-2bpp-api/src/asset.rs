//! An encoded tile set together with the options it is exported under.

use crate::options::ExportOptions;
use gb_tile_export_2bpp::TileSet;

/// A tile set ready to be handed to an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileAsset {
    options: ExportOptions,
    tiles: TileSet,
}

impl TileAsset {
    /// Pairs validated options with an encoded tile set.
    pub fn new(options: ExportOptions, tiles: TileSet) -> Self {
        Self { options, tiles }
    }

    /// The options this asset is exported with.
    #[inline]
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// The encoded tiles and tile map.
    #[inline]
    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// The asset name, exactly as given. Used for C symbol names.
    #[inline]
    pub fn name(&self) -> &str {
        self.options.asset_name()
    }

    /// The ROM bank; `0` is unbanked.
    #[inline]
    pub fn bank(&self) -> u8 {
        self.options.bank()
    }

    /// Lowercase asset name, used for output file names.
    pub fn file_stem(&self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Uppercase asset name, used inside preprocessor macros.
    pub fn macro_stem(&self) -> String {
        self.name().to_ascii_uppercase()
    }
}
