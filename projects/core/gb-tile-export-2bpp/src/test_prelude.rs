//! Common imports and helpers for tests in this crate.

pub use crate::bitplane::EncodedTile;
pub use crate::constants::TILE_SIZE;
pub use crate::grid::PixelGrid;
pub use rstest::rstest;

/// Builds a grid where the palette index of each pixel is `f(x, y)`.
pub fn grid_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> PixelGrid {
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| f(x, y))
        .collect();
    PixelGrid::new(width, height, pixels).unwrap()
}

/// Builds a grid whose first `unique` tiles are all distinct; every later tile repeats
/// the first one (which is blank).
pub fn grid_with_unique_tiles(width: usize, height: usize, unique: usize) -> PixelGrid {
    let tile_width = width / TILE_SIZE;
    grid_from_fn(width, height, |x, y| {
        let tile = (y / TILE_SIZE) * tile_width + x / TILE_SIZE;
        let id = if tile < unique { tile } else { 0 };

        // The tile id is spelled out two bits at a time along the top row.
        let (col, row) = (x % TILE_SIZE, y % TILE_SIZE);
        if row == 0 {
            ((id >> (col * 2)) & 0b11) as u8
        } else {
            0
        }
    })
}

/// Creates one distinct encoded tile per distinct id.
pub fn tiles_from_ids(ids: &[u16]) -> Vec<EncodedTile> {
    ids.iter()
        .map(|&id| EncodedTile::from_rows([id, 0, 0, 0, 0, 0, 0, !id]))
        .collect()
}

/// Deterministic pseudo random ids in `0..pool` (xorshift32).
pub fn pseudo_random_ids(seed: u32, len: usize, pool: u16) -> Vec<u16> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % pool as u32) as u16
        })
        .collect()
}

/// Unpacks a row word back into the 8 palette indices it was made from.
pub fn decode_row(word: u16) -> [u8; TILE_SIZE] {
    let low_plane = (word >> 8) as u8;
    let high_plane = word as u8;
    core::array::from_fn(|col| {
        let shift = 7 - col;
        ((low_plane >> shift) & 1) | (((high_plane >> shift) & 1) << 1)
    })
}
