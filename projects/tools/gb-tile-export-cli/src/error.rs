use gb_tile_export_2bpp_api::TileExportError;
use gb_tile_export_gbdk::EmitError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not read input file '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Export(#[from] TileExportError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}
