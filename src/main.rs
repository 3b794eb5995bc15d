use anyhow::Result;
use clap::Parser;

use dfs_lineup_export::cli::{handle_export_command, ExportCommands};

#[derive(Parser)]
#[command(
    name = "dfs-export",
    version,
    about = "Export daily-fantasy-sports lineups",
    long_about = "dfs-export converts finalized DFS lineups into external \
                  representations: a fresh CSV file, a merge into an existing \
                  FantasyDraft upload template, or JSON. Lineups are read from \
                  a JSON file produced by your optimizer."
)]
struct Cli {
    #[command(subcommand)]
    command: ExportCommands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    handle_export_command(cli.command)?;
    Ok(())
}
