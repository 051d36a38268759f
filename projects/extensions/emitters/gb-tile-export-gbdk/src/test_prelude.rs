//! Common test imports and utilities for emitter tests.
#![allow(unused_imports)]

pub use gb_tile_export_2bpp_api::{TileAsset, TileExportBuilder};
pub use rstest::rstest;

/// Exports a grid whose pixel at `(x, y)` is `f(x, y)`.
pub(crate) fn asset_from_fn(
    name: &str,
    bank: u32,
    width: usize,
    height: usize,
    f: impl Fn(usize, usize) -> u8,
) -> TileAsset {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(f(x, y));
        }
    }

    TileExportBuilder::new()
        .asset_name(name)
        .bank(bank)
        .export_indices(width, height, &pixels)
        .unwrap()
}

/// Exports a grid where the first `unique` tiles (row-major) are distinct and every
/// later tile repeats tile 0.
///
/// Tile `i` spells `i` along its top row, two bits per pixel.
pub(crate) fn asset_with_unique_tiles(
    name: &str,
    width: usize,
    height: usize,
    unique: usize,
) -> TileAsset {
    let tiles_across = width / 8;
    asset_from_fn(name, 0, width, height, |x, y| {
        let tile = (y / 8) * tiles_across + x / 8;
        let id = if tile < unique { tile } else { 0 };
        if y % 8 == 0 {
            ((id >> ((x % 8) * 2)) & 3) as u8
        } else {
            0
        }
    })
}
