mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Converts 4-colour indexed images into Game Boy tile data and tilemaps
struct TopLevel {
    /// log debug output (overrides RUST_LOG)
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Export(commands::export::ExportCmd),
    Stats(commands::stats::StatsCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    util::init_logging(cli.verbose);

    match cli.command {
        Commands::Export(cmd) => {
            commands::export::handle_export_command(cmd)?;
        }
        Commands::Stats(cmd) => {
            commands::stats::handle_stats_command(cmd)?;
        }
    }

    Ok(())
}
