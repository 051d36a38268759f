//! Removal of bit-identical tiles.
//!
//! Given the encoded tiles of an image in row-major order, deduplication produces the
//! table of unique ("canonical") tiles in order of first occurrence, plus a [`TileMap`]
//! pointing every tile position at its entry in that table.
//!
//! The earliest tile with a given content is always the canonical one. Because the
//! duplicates are dropped from the table, a canonical tile at position `i` ends up at
//! index `i - (number of duplicates before i)`.
//!
//! Two implementations are provided with identical results:
//!
//! - [`deduplicate_scan`]: compares each canonical tile against every later one, O(n²).
//! - [`deduplicate_hashed`]: looks tiles up by content, O(n).
//!
//! [`deduplicate`] is the one used by the export pipeline.

mod hashed;
mod scan;

pub use hashed::deduplicate_hashed;
pub use scan::deduplicate_scan;

use crate::bitplane::EncodedTile;

/// The role of a single tile position after deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// First occurrence of its content; stored in the table at the given index.
    Canonical(usize),
    /// Repeats an earlier tile; reuses the table entry at the given index.
    DuplicateOf(usize),
}

impl TileClass {
    /// Index into the canonical tile table used at this position.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TileClass::Canonical(index) | TileClass::DuplicateOf(index) => index,
        }
    }

    /// Whether this position was removed as a duplicate.
    #[inline]
    pub fn is_duplicate(self) -> bool {
        matches!(self, TileClass::DuplicateOf(_))
    }
}

/// Per position table indices that rebuild the image from the canonical tile table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    entries: Vec<TileClass>,
    width: usize,
}

impl TileMap {
    /// Creates a tilemap from per position classes, `width` being the map width in tiles.
    ///
    /// # Panics
    ///
    /// If `width` is zero or does not evenly divide the number of entries.
    pub fn new(entries: Vec<TileClass>, width: usize) -> Self {
        assert!(width > 0 && entries.len() % width == 0);
        Self { entries, width }
    }

    /// Number of tile positions (duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Width of the map, in tiles.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the map, in tiles.
    #[inline]
    pub fn height(&self) -> usize {
        self.entries.len() / self.width
    }

    /// The classification of every position, row-major.
    #[inline]
    pub fn entries(&self) -> &[TileClass] {
        &self.entries
    }

    /// The table index of every position, row-major.
    #[inline]
    pub fn indices(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.entries.iter().map(|class| class.index())
    }

    /// The table indices of the map, one slice per row of tiles.
    #[inline]
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[TileClass]> + '_ {
        self.entries.chunks_exact(self.width)
    }

    /// Number of positions removed as duplicates.
    pub fn duplicate_count(&self) -> usize {
        self.entries.iter().filter(|class| class.is_duplicate()).count()
    }
}

/// Output of a deduplication pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplicated {
    /// Unique tiles, in order of first occurrence.
    pub table: Vec<EncodedTile>,
    /// Classification of every input position, in input order.
    pub classes: Vec<TileClass>,
}

/// Deduplicates `tiles` using the default implementation.
#[inline]
pub fn deduplicate(tiles: &[EncodedTile]) -> Deduplicated {
    deduplicate_hashed(tiles)
}
