use super::{Deduplicated, TileClass};
use crate::bitplane::EncodedTile;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Deduplicates tiles with a content lookup, in a single pass.
///
/// The first position holding a given content is appended to the table and recorded;
/// any later position with the same content reuses that table index. The table length
/// at the time a canonical tile is appended equals its position minus the duplicates
/// seen so far, so the result is identical to [`deduplicate_scan`](super::deduplicate_scan).
pub fn deduplicate_hashed(tiles: &[EncodedTile]) -> Deduplicated {
    let mut first_seen: HashMap<EncodedTile, usize> = HashMap::with_capacity(tiles.len());
    let mut table = Vec::with_capacity(tiles.len());
    let mut classes = Vec::with_capacity(tiles.len());

    for tile in tiles {
        let class = match first_seen.entry(*tile) {
            Entry::Occupied(entry) => TileClass::DuplicateOf(*entry.get()),
            Entry::Vacant(entry) => {
                let index = table.len();
                table.push(*tile);
                entry.insert(index);
                TileClass::Canonical(index)
            }
        };
        classes.push(class);
    }

    Deduplicated { table, classes }
}
