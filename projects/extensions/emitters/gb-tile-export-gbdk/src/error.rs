//! Error types for emitting tile assets.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for emitter operations
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors that can occur while writing an asset to disk.
#[derive(Debug, Error)]
pub enum EmitError {
    /// An output file could not be written.
    #[error("Could not write '{}': {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A tile map entry does not fit in the one byte the binary map format allows.
    #[error("Tile map entry {position} refers to tile {index}, the binary tile map can only address tiles 0-255")]
    MapIndexOutOfRange {
        /// Position of the entry in the map, row-major.
        position: usize,
        /// The canonical index that did not fit.
        index: usize,
    },
}
