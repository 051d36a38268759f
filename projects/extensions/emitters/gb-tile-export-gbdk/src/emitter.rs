//! Common interface of the output formats.

use crate::error::{EmitError, EmitResult};
use gb_tile_export_2bpp_api::TileAsset;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An output format for [`TileAsset`]s.
///
/// Every emitter writes a fixed set of files named after the asset's
/// [`file_stem`](TileAsset::file_stem) into a target folder.
pub trait AssetEmitter {
    /// Short, human readable name of the format.
    fn format_name(&self) -> &'static str;

    /// Renders every output file as `(file name, contents)`, without touching the disk.
    fn render(&self, asset: &TileAsset) -> EmitResult<Vec<(String, Vec<u8>)>>;

    /// Writes all output files into `folder` and returns their paths, in render order.
    ///
    /// # Errors
    ///
    /// Any error of [`AssetEmitter::render`], or [`EmitError::Io`] naming the file that
    /// could not be written.
    fn write_files(&self, asset: &TileAsset, folder: &Path) -> EmitResult<Vec<PathBuf>> {
        let files = self.render(asset)?;
        let mut paths = Vec::with_capacity(files.len());

        for (name, contents) in files {
            let path = folder.join(name);
            write_file(&path, &contents)?;
            paths.push(path);
        }

        Ok(paths)
    }
}

/// Writes a single output file, attaching its path to any IO error.
pub(crate) fn write_file(path: &Path, contents: &[u8]) -> EmitResult<()> {
    fs::write(path, contents).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}
