//! Builder pattern implementation for tile export options.

use crate::asset::TileAsset;
use crate::encode::{encode_grid, encode_indices};
use crate::error::TileExportError;
use crate::options::ExportOptions;
use gb_tile_export_2bpp::PixelGrid;

/// Builder for [`ExportOptions`], with shortcuts that export an image in one go.
#[derive(Debug, Clone, Default)]
pub struct TileExportBuilder {
    asset_name: Option<String>,
    bank: Option<u32>,
}

impl TileExportBuilder {
    /// Create a new options builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset name used for generated file and symbol names.
    pub fn asset_name(mut self, name: impl Into<String>) -> Self {
        self.asset_name = Some(name.into());
        self
    }

    /// Set the ROM bank. Defaults to `0`, the unbanked area.
    pub fn bank(mut self, bank: u32) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Validate the configured values and build the options.
    ///
    /// # Errors
    ///
    /// [`TileExportError::EmptyAssetName`] if no name was set, otherwise any error
    /// of [`ExportOptions::new`].
    pub fn build(self) -> Result<ExportOptions, TileExportError> {
        ExportOptions::new(self.asset_name.unwrap_or_default(), self.bank.unwrap_or(0))
    }

    /// Build the options and encode an already validated grid with them.
    pub fn export(self, grid: &PixelGrid) -> Result<TileAsset, TileExportError> {
        let options = self.build()?;
        Ok(TileAsset::new(options, encode_grid(grid)))
    }

    /// Build the options and encode a raw buffer of palette indices with them.
    ///
    /// # Parameters
    ///
    /// - `width`, `height`: Image dimensions in pixels
    /// - `pixels`: Row-major palette indices, one byte per pixel
    pub fn export_indices(
        self,
        width: usize,
        height: usize,
        pixels: &[u8],
    ) -> Result<TileAsset, TileExportError> {
        // Options first, so a bad name fails before any encoding work.
        let options = self.build()?;
        let tiles = encode_indices(width, height, pixels)?;
        Ok(TileAsset::new(options, tiles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb_tile_export_2bpp::GridError;
    use rstest::rstest;

    #[test]
    fn builder() {
        let options = TileExportBuilder::new()
            .asset_name("Overworld")
            .bank(3)
            .build()
            .unwrap();

        assert_eq!(options.asset_name(), "Overworld");
        assert_eq!(options.bank(), 3);
    }

    #[test]
    fn bank_defaults_to_zero() {
        let options = TileExportBuilder::new().asset_name("Bg").build().unwrap();
        assert_eq!(options.bank(), 0);
        assert!(!options.is_banked());
    }

    #[test]
    fn missing_name_is_rejected() {
        assert_eq!(
            TileExportBuilder::new().bank(1).build().unwrap_err(),
            TileExportError::EmptyAssetName
        );
    }

    #[rstest]
    #[case(8, 8, 63, GridError::PixelCountMismatch { expected: 64, actual: 63 })]
    #[case(12, 8, 96, GridError::NotTileAligned { width: 12, height: 8 })]
    #[case(0, 8, 0, GridError::SizeOutOfRange { width: 0, height: 8 })]
    #[case(264, 8, 264 * 8, GridError::SizeOutOfRange { width: 264, height: 8 })]
    fn export_indices_rejects_bad_images(
        #[case] width: usize,
        #[case] height: usize,
        #[case] len: usize,
        #[case] expected: GridError,
    ) {
        let pixels = vec![0u8; len];
        let result = TileExportBuilder::new()
            .asset_name("Bg")
            .export_indices(width, height, &pixels);

        assert_eq!(result.unwrap_err(), TileExportError::InvalidImage(expected));
    }

    #[test]
    fn export_indices_rejects_palette_overflow() {
        let mut pixels = vec![0u8; 64];
        pixels[9] = 4;
        let result = TileExportBuilder::new()
            .asset_name("Bg")
            .export_indices(8, 8, &pixels);

        assert_eq!(
            result.unwrap_err(),
            TileExportError::InvalidImage(GridError::InvalidPaletteIndex {
                x: 1,
                y: 1,
                value: 4
            })
        );
    }

    #[test]
    fn invalid_options_win_over_invalid_image() {
        let result = TileExportBuilder::new()
            .asset_name("bad name")
            .export_indices(3, 3, &[]);

        assert_eq!(
            result.unwrap_err(),
            TileExportError::InvalidAssetName("bad name".to_owned())
        );
    }

    #[test]
    fn export_grid() {
        let grid = PixelGrid::new(16, 16, vec![2; 256]).unwrap();
        let asset = TileExportBuilder::new()
            .asset_name("Fill")
            .export(&grid)
            .unwrap();

        assert_eq!(asset.tiles().metadata().unique_tile_count, 1);
        assert_eq!(asset.tiles().metadata().tile_count_total, 4);
        assert_eq!(asset.name(), "Fill");
    }
}
