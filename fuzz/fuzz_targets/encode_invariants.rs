#![no_main]

// Encodes arbitrary valid images and checks the tile set against the input:
// both deduplicators agree, the table has no repeats, and the map rebuilds every tile.

use gb_tile_export_2bpp::constants::VRAM_TILE_BUDGET;
use gb_tile_export_2bpp::dedup::{deduplicate_hashed, deduplicate_scan};
use gb_tile_export_2bpp::{encode, encode_tile, extract_tiles, EncodedTile, PixelGrid};
use libfuzzer_sys::{arbitrary, fuzz_target};
use std::collections::HashSet;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub tiles_across: u8,
    pub tiles_down: u8,
    /// Repeated to fill the image; a short palette gives many duplicate tiles.
    pub pattern: Vec<u8>,
}

fuzz_target!(|image: Image| {
    if image.pattern.is_empty() {
        return;
    }

    let width = (image.tiles_across as usize % 32 + 1) * 8;
    let height = (image.tiles_down as usize % 32 + 1) * 8;
    let pixels = (0..width * height)
        .map(|i| image.pattern[i % image.pattern.len()] & 3)
        .collect();
    let grid = PixelGrid::new(width, height, pixels).unwrap();

    let tiles: Vec<EncodedTile> = extract_tiles(&grid).map(|t| encode_tile(&t)).collect();
    assert_eq!(deduplicate_scan(&tiles), deduplicate_hashed(&tiles));

    let set = encode(&grid);
    let metadata = set.metadata();
    assert_eq!(metadata.tile_count_total, tiles.len());
    assert_eq!(metadata.unique_tile_count, set.table().len());
    assert_eq!(
        metadata.exceeds_tile_budget,
        metadata.unique_tile_count > VRAM_TILE_BUDGET
    );

    let distinct: HashSet<_> = set.table().iter().collect();
    assert_eq!(distinct.len(), set.table().len(), "table holds a repeat");

    for (position, index) in set.map().indices().enumerate() {
        assert_eq!(set.table()[index], tiles[position]);
    }
});
