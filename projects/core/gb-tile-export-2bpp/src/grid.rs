//! Validated pixel input for the export pipeline.
//!
//! A [`PixelGrid`] can only be constructed from data that satisfies every input
//! requirement of the exporter, so the stages downstream of it never fail.

use crate::constants::{IMAGE_SIZE_MAX, IMAGE_SIZE_MIN, PALETTE_COLORS, TILE_SIZE};
use thiserror::Error;

/// Reasons a pixel buffer is rejected as export input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is outside of the accepted range.
    #[error(
        "Image size should be between {min}x{min} and {max}x{max} pixels, got {width}x{height}.",
        min = IMAGE_SIZE_MIN,
        max = IMAGE_SIZE_MAX
    )]
    SizeOutOfRange {
        /// Width of the rejected image, in pixels.
        width: usize,
        /// Height of the rejected image, in pixels.
        height: usize,
    },

    /// Width or height is not made of whole tiles.
    #[error(
        "Both width and height should be multiples of {tile}, got {width}x{height}.",
        tile = TILE_SIZE
    )]
    NotTileAligned {
        /// Width of the rejected image, in pixels.
        width: usize,
        /// Height of the rejected image, in pixels.
        height: usize,
    },

    /// The pixel buffer does not hold exactly `width * height` entries.
    #[error("Pixel buffer has {actual} entries, expected {expected} (width * height).")]
    PixelCountMismatch {
        /// The number of pixels implied by the dimensions.
        expected: usize,
        /// The number of pixels actually supplied.
        actual: usize,
    },

    /// A pixel refers to a colour outside of the 4-colour palette.
    #[error("Pixel at ({x}, {y}) has palette index {value}, the image should be 4-color only.")]
    InvalidPaletteIndex {
        /// Column of the offending pixel.
        x: usize,
        /// Row of the offending pixel.
        y: usize,
        /// The out of range palette index.
        value: u8,
    },
}

/// A rectangular grid of palette indices, stored row-major.
///
/// # Invariants
///
/// - `width` and `height` are multiples of [`TILE_SIZE`] in
///   `[IMAGE_SIZE_MIN, IMAGE_SIZE_MAX]`.
/// - Every pixel is a palette index below [`PALETTE_COLORS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Box<[u8]>,
}

impl PixelGrid {
    /// Creates a grid from row-major palette indices, one byte per pixel.
    ///
    /// # Errors
    ///
    /// - [`GridError::SizeOutOfRange`] if a dimension is outside `[8, 256]`
    /// - [`GridError::NotTileAligned`] if a dimension is not a multiple of 8
    /// - [`GridError::PixelCountMismatch`] if `pixels.len() != width * height`
    /// - [`GridError::InvalidPaletteIndex`] if any pixel is 4 or above
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, GridError> {
        let in_range = |size: usize| (IMAGE_SIZE_MIN..=IMAGE_SIZE_MAX).contains(&size);
        if !in_range(width) || !in_range(height) {
            return Err(GridError::SizeOutOfRange { width, height });
        }

        if width % TILE_SIZE != 0 || height % TILE_SIZE != 0 {
            return Err(GridError::NotTileAligned { width, height });
        }

        let expected = width * height;
        if pixels.len() != expected {
            return Err(GridError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        if let Some(pos) = pixels.iter().position(|&value| value >= PALETTE_COLORS) {
            return Err(GridError::InvalidPaletteIndex {
                x: pos % width,
                y: pos / width,
                value: pixels[pos],
            });
        }

        Ok(Self {
            width,
            height,
            pixels: pixels.into_boxed_slice(),
        })
    }

    /// Width of the image, in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image, in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the image, in tiles.
    #[inline]
    pub fn tile_width(&self) -> usize {
        self.width / TILE_SIZE
    }

    /// Height of the image, in tiles.
    #[inline]
    pub fn tile_height(&self) -> usize {
        self.height / TILE_SIZE
    }

    /// Total number of tiles in the image, duplicates included.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tile_width() * self.tile_height()
    }

    /// Returns the palette index at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` lie outside of the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Returns one full row of palette indices.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}
