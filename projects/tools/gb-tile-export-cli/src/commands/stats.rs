use crate::error::CliError;
use crate::util::{print_budget_warning, print_metadata, read_indices};
use argh::FromArgs;
use bytesize::ByteSize;
use gb_tile_export_2bpp_api::constants::TILE_BYTES;
use gb_tile_export_2bpp_api::encode_indices;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print tile statistics of a raw palette index image without writing anything
#[argh(subcommand, name = "stats")]
pub struct StatsCmd {
    /// raw input file, one palette index (0-3) per pixel, row-major
    #[argh(option)]
    pub input: PathBuf,

    /// image width in pixels
    #[argh(option)]
    pub width: usize,

    /// image height in pixels
    #[argh(option)]
    pub height: usize,
}

pub fn handle_stats_command(cmd: StatsCmd) -> Result<(), CliError> {
    let pixels = read_indices(&cmd.input)?;
    let tiles = encode_indices(cmd.width, cmd.height, &pixels)?;
    let metadata = tiles.metadata();

    print_metadata(metadata);
    println!(
        "Tile data:     {}",
        ByteSize((metadata.unique_tile_count * TILE_BYTES) as u64)
    );
    print_budget_warning(metadata);
    Ok(())
}
