use crate::error::CliError;
use crate::util::{canonicalize_cli_path, print_budget_warning, print_metadata, read_indices};
use argh::FromArgs;
use bytesize::ByteSize;
use gb_tile_export_2bpp_api::TileExportBuilder;
use gb_tile_export_gbdk::{AssetEmitter, BinaryEmitter, GbdkEmitter};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(FromArgs, Debug)]
/// Export a raw palette index image as Game Boy tile data and a tilemap
#[argh(subcommand, name = "export")]
pub struct ExportCmd {
    /// raw input file, one palette index (0-3) per pixel, row-major
    #[argh(option)]
    pub input: PathBuf,

    /// image width in pixels
    #[argh(option)]
    pub width: usize,

    /// image height in pixels
    #[argh(option)]
    pub height: usize,

    /// asset name, used for file and symbol names
    #[argh(option)]
    pub name: String,

    /// ROM bank to place the asset in [default: 0]
    #[argh(option, default = "0")]
    pub bank: u32,

    /// output directory path [default: current directory]
    #[argh(option, default = "PathBuf::from(\".\")", from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// output format: gbdk, binary [default: gbdk]
    #[argh(option, default = "OutputFormat::Gbdk")]
    pub format: OutputFormat,
}

/// Output formats the exporter can write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// GBDK-2020 `.h` and `.c` files
    Gbdk,
    /// Raw `.2bpp` tile data and `.tilemap`
    Binary,
}

impl OutputFormat {
    fn emitter(self) -> &'static dyn AssetEmitter {
        match self {
            Self::Gbdk => &GbdkEmitter,
            Self::Binary => &BinaryEmitter,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gbdk" | "c" => Ok(Self::Gbdk),
            "binary" | "bin" => Ok(Self::Binary),
            _ => Err(format!(
                "Unknown output format: {s}. Valid options: gbdk, binary"
            )),
        }
    }
}

pub fn handle_export_command(cmd: ExportCmd) -> Result<(), CliError> {
    let pixels = read_indices(&cmd.input)?;
    let asset = TileExportBuilder::new()
        .asset_name(cmd.name)
        .bank(cmd.bank)
        .export_indices(cmd.width, cmd.height, &pixels)?;

    let emitter = cmd.format.emitter();
    info!(
        asset = asset.name(),
        format = emitter.format_name(),
        "exporting"
    );

    let paths = emitter.write_files(&asset, &cmd.output)?;

    let metadata = asset.tiles().metadata();
    println!("=== {} (bank {}) ===", asset.name(), asset.bank());
    print_metadata(metadata);

    let mut total_bytes = 0;
    for path in &paths {
        let size = fs::metadata(path)?.len();
        total_bytes += size;
        println!("Wrote {} ({})", path.display(), ByteSize(size));
    }
    println!("Total written: {}", ByteSize(total_bytes));

    print_budget_warning(metadata);
    Ok(())
}
