#![no_main]

// Feeds untrusted dimensions, names and pixel buffers through the export API and the
// emitters. Invalid input must come back as an error, never a panic.

use gb_tile_export_2bpp_api::TileExportBuilder;
use gb_tile_export_gbdk::{render_source, tile_data_bytes, tilemap_bytes};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Request {
    pub width: u16,
    pub height: u16,
    pub name: String,
    pub bank: u32,
    pub pixels: Vec<u8>,
}

fuzz_target!(|request: Request| {
    let Ok(asset) = TileExportBuilder::new()
        .asset_name(request.name)
        .bank(request.bank)
        .export_indices(
            request.width as usize,
            request.height as usize,
            &request.pixels,
        )
    else {
        return;
    };

    let metadata = asset.tiles().metadata();
    assert_eq!(tile_data_bytes(asset.tiles()).len(), 16 * metadata.unique_tile_count);
    if let Ok(map) = tilemap_bytes(asset.tiles()) {
        assert_eq!(map.len(), metadata.tile_count_total);
    }
    assert!(render_source(&asset).contains(&format!("BackgroundMap{}[]", asset.name())));
});
