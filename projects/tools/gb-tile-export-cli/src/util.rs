use crate::error::CliError;
use gb_tile_export_2bpp_api::constants::VRAM_TILE_BUDGET;
use gb_tile_export_2bpp_api::TileSetMetadata;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`; `verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Canonicalizes a CLI path argument, creating the directory if it doesn't exist.
///
/// # Arguments
///
/// * `value` - The path string to canonicalize
///
/// # Returns
///
/// A canonicalized PathBuf on success, or a String error message on failure.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Reads a raw palette index file: one byte per pixel, row-major.
pub fn read_indices(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Prints the tile statistics shared by all commands.
pub fn print_metadata(metadata: &TileSetMetadata) {
    println!(
        "Size:          {}x{} pixels ({}x{} tiles)",
        metadata.pixel_width(),
        metadata.pixel_height(),
        metadata.tile_width,
        metadata.tile_height
    );
    println!("Total tiles:   {}", metadata.tile_count_total);
    println!(
        "Unique tiles:  {} ({} duplicates removed)",
        metadata.unique_tile_count,
        metadata.duplicate_count()
    );
}

/// Prints the advisory for tile sets that do not fit in video memory at once.
pub fn print_budget_warning(metadata: &TileSetMetadata) {
    if metadata.exceeds_tile_budget {
        println!(
            "WARNING: this image has {} unique tiles. The Game Boy video memory can only fit up to {} at the same time.",
            metadata.unique_tile_count,
            VRAM_TILE_BUDGET
        );
    }
}
