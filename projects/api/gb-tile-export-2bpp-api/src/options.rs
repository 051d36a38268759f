//! Export options: what an asset is called and where it lives in ROM.

use crate::error::TileExportError;

/// Maximum length of an asset name, in bytes.
pub const ASSET_NAME_MAX: usize = 32;

/// Last ROM bank an asset can be placed in.
pub const BANK_MAX: u32 = 255;

/// Validated options an asset is exported with.
///
/// Construct through [`ExportOptions::new`] or
/// [`TileExportBuilder`](crate::TileExportBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportOptions {
    asset_name: String,
    bank: u8,
}

impl ExportOptions {
    /// Validates and creates export options.
    ///
    /// # Parameters
    ///
    /// - `asset_name`: Base name of the generated symbols; a C identifier of at most
    ///   [`ASSET_NAME_MAX`] bytes.
    /// - `bank`: ROM bank number, `0` for the default bank, at most [`BANK_MAX`].
    ///
    /// # Errors
    ///
    /// - [`TileExportError::EmptyAssetName`] if the name is empty
    /// - [`TileExportError::AssetNameTooLong`] if the name is over [`ASSET_NAME_MAX`] bytes
    /// - [`TileExportError::InvalidAssetName`] if the name is not a C identifier
    /// - [`TileExportError::InvalidBank`] if the bank is above [`BANK_MAX`]
    pub fn new(asset_name: impl Into<String>, bank: u32) -> Result<Self, TileExportError> {
        let asset_name = asset_name.into();
        validate_asset_name(&asset_name)?;

        let bank = u8::try_from(bank).map_err(|_| TileExportError::InvalidBank(bank))?;

        Ok(Self { asset_name, bank })
    }

    /// The asset name, exactly as given.
    #[inline]
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// The ROM bank number; `0` means the default bank.
    #[inline]
    pub fn bank(&self) -> u8 {
        self.bank
    }

    /// Whether the asset is placed in a switchable bank rather than the default one.
    #[inline]
    pub fn is_banked(&self) -> bool {
        self.bank != 0
    }
}

fn validate_asset_name(name: &str) -> Result<(), TileExportError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(TileExportError::EmptyAssetName);
    };

    if name.len() > ASSET_NAME_MAX {
        return Err(TileExportError::AssetNameTooLong {
            name: name.to_owned(),
        });
    }

    let valid_first = first.is_ascii_alphabetic() || first == '_';
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_first || !valid_rest {
        return Err(TileExportError::InvalidAssetName(name.to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Title")]
    #[case("_hidden")]
    #[case("level_01")]
    #[case("ABCDEFGHIJKLMNOPQRSTUVWXYZ012345")]
    fn accepts_c_identifiers(#[case] name: &str) {
        let options = ExportOptions::new(name, 0).unwrap();
        assert_eq!(options.asset_name(), name);
        assert!(!options.is_banked());
    }

    #[rstest]
    #[case("1st")]
    #[case("my-asset")]
    #[case("with space")]
    #[case("ünicode")]
    fn rejects_non_identifiers(#[case] name: &str) {
        assert_eq!(
            ExportOptions::new(name, 0).unwrap_err(),
            TileExportError::InvalidAssetName(name.to_owned())
        );
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            ExportOptions::new("", 0).unwrap_err(),
            TileExportError::EmptyAssetName
        );
    }

    #[test]
    fn rejects_long_name() {
        let name = "a".repeat(ASSET_NAME_MAX + 1);
        assert_eq!(
            ExportOptions::new(name.clone(), 0).unwrap_err(),
            TileExportError::AssetNameTooLong { name }
        );
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(255, true)]
    fn accepts_banks_up_to_255(#[case] bank: u32, #[case] banked: bool) {
        let options = ExportOptions::new("Bg", bank).unwrap();
        assert_eq!(options.bank() as u32, bank);
        assert_eq!(options.is_banked(), banked);
    }

    #[rstest]
    #[case(256)]
    #[case(u32::MAX)]
    fn rejects_banks_above_255(#[case] bank: u32) {
        assert_eq!(
            ExportOptions::new("Bg", bank).unwrap_err(),
            TileExportError::InvalidBank(bank)
        );
    }
}
