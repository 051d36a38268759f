//! Raw binary output, for toolchains that include tile data with `INCBIN`-style directives.
//!
//! - `<stem>.2bpp`: the canonical tiles, 16 bytes each, in hardware byte order
//! - `<stem>.tilemap`: one byte per tile position, row-major

use crate::emitter::{write_file, AssetEmitter};
use crate::error::{EmitError, EmitResult};
use gb_tile_export_2bpp_api::constants::TILE_BYTES;
use gb_tile_export_2bpp_api::{TileAsset, TileSet};
use std::path::{Path, PathBuf};

/// Emits `.2bpp` tile data and `.tilemap` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryEmitter;

impl AssetEmitter for BinaryEmitter {
    fn format_name(&self) -> &'static str {
        "raw binary"
    }

    fn render(&self, asset: &TileAsset) -> EmitResult<Vec<(String, Vec<u8>)>> {
        let stem = asset.file_stem();
        // The map is checked first so nothing is produced for an unrepresentable asset.
        let map = tilemap_bytes(asset.tiles())?;
        Ok(vec![
            (format!("{stem}.2bpp"), tile_data_bytes(asset.tiles())),
            (format!("{stem}.tilemap"), map),
        ])
    }
}

/// Concatenates the canonical tiles, [`TILE_BYTES`] per tile.
pub fn tile_data_bytes(tiles: &TileSet) -> Vec<u8> {
    let mut out = Vec::with_capacity(tiles.table().len() * TILE_BYTES);
    for tile in tiles.table() {
        out.extend_from_slice(&tile.to_bytes());
    }
    out
}

/// Converts the tile map to one byte per entry.
///
/// # Errors
///
/// [`EmitError::MapIndexOutOfRange`] for the first entry whose canonical index is above 255.
pub fn tilemap_bytes(tiles: &TileSet) -> EmitResult<Vec<u8>> {
    tiles
        .map()
        .indices()
        .enumerate()
        .map(|(position, index)| {
            u8::try_from(index).map_err(|_| EmitError::MapIndexOutOfRange { position, index })
        })
        .collect()
}

/// Writes `<stem>.2bpp` and `<stem>.tilemap` into `folder`.
///
/// # Returns
///
/// The paths of the tile data and the tile map, in that order.
pub fn write_binary_files(asset: &TileAsset, folder: &Path) -> EmitResult<(PathBuf, PathBuf)> {
    let stem = asset.file_stem();
    let map = tilemap_bytes(asset.tiles())?;

    let data_path = folder.join(format!("{stem}.2bpp"));
    write_file(&data_path, &tile_data_bytes(asset.tiles()))?;

    let map_path = folder.join(format!("{stem}.tilemap"));
    write_file(&map_path, &map)?;

    Ok((data_path, map_path))
}
