use super::{Deduplicated, TileClass};
use crate::bitplane::EncodedTile;

/// Deduplicates tiles by comparing every canonical tile against all later tiles.
///
/// Positions are visited in order. A position not yet known to be a duplicate becomes
/// canonical with index `position - previous_duplicates`, and every later position with
/// identical content is marked as a duplicate of it; marked positions are neither
/// anchors nor comparison targets afterwards.
///
/// This performs O(n²) tile comparisons, which is fine for the at most 1024 tiles of a
/// 256x256 image. See [`deduplicate_hashed`](super::deduplicate_hashed) for a linear
/// alternative with the same output.
pub fn deduplicate_scan(tiles: &[EncodedTile]) -> Deduplicated {
    let mut classes: Vec<Option<TileClass>> = vec![None; tiles.len()];
    let mut table = Vec::with_capacity(tiles.len());
    let mut previous_duplicates = 0;

    for anchor in 0..tiles.len() {
        if classes[anchor].is_some() {
            previous_duplicates += 1;
            continue;
        }

        let index = anchor - previous_duplicates;
        classes[anchor] = Some(TileClass::Canonical(index));
        table.push(tiles[anchor]);

        for candidate in anchor + 1..tiles.len() {
            if classes[candidate].is_none() && tiles[candidate] == tiles[anchor] {
                classes[candidate] = Some(TileClass::DuplicateOf(index));
            }
        }
    }

    Deduplicated {
        table,
        // Every anchor either was classified earlier or classifies itself.
        classes: classes.into_iter().flatten().collect(),
    }
}
