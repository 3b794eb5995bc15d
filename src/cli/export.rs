//! CLI commands for lineup export
//!
//! Bridges the clap argument parsing with the export functions: loads the
//! lineups input file, opens output files, and reports outcomes.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{ExportError, ExportResult};
use crate::export::{csv, fantasy_draft, json, RenderFn};
use crate::models::LineupPlayer;
use crate::storage::read_lineups_json;

/// Export subcommands, one per output format
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write lineups to a new CSV file
    Csv {
        /// Lineups input file (JSON array of finalized lineups)
        lineups: PathBuf,

        /// Output CSV file path (created or overwritten)
        output: PathBuf,

        /// Render player cells as names without ids
        #[arg(long)]
        names_only: bool,
    },

    /// Merge lineups into an existing FantasyDraft upload template
    #[command(name = "fantasy-draft")]
    FantasyDraft {
        /// Lineups input file (JSON array of finalized lineups)
        lineups: PathBuf,

        /// Existing template CSV to merge into (rewritten in place)
        template: PathBuf,

        /// Render player cells as names without ids
        #[arg(long)]
        names_only: bool,
    },

    /// Print lineups as JSON
    Json {
        /// Lineups input file (JSON array of finalized lineups)
        lineups: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Accepted for symmetry with the CSV formats; player entries are
        /// raw ids and are never rendered
        #[arg(long)]
        names_only: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(cmd: ExportCommands) -> ExportResult<()> {
    match cmd {
        ExportCommands::Csv {
            lineups,
            output,
            names_only,
        } => handle_export_csv(lineups, output, names_only),
        ExportCommands::FantasyDraft {
            lineups,
            template,
            names_only,
        } => handle_export_fantasy_draft(lineups, template, names_only),
        ExportCommands::Json {
            lineups,
            output,
            pretty,
            names_only: _,
        } => handle_export_json(lineups, output, pretty),
    }
}

fn names_only_render(player: &LineupPlayer) -> String {
    player.full_name.clone()
}

fn render_override(names_only: bool) -> Option<&'static RenderFn> {
    if names_only {
        Some(&names_only_render)
    } else {
        None
    }
}

/// Handle CSV export
fn handle_export_csv(lineups: PathBuf, output: PathBuf, names_only: bool) -> ExportResult<()> {
    let lineups = read_lineups_json(&lineups)?;

    let file = File::create(&output).map_err(|e| {
        ExportError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let writer = BufWriter::new(file);

    csv::export_lineups_csv(&lineups, writer, render_override(names_only))?;

    println!("Exported {} lineups to: {}", lineups.len(), output.display());
    Ok(())
}

/// Handle FantasyDraft template merge
fn handle_export_fantasy_draft(
    lineups: PathBuf,
    template: PathBuf,
    names_only: bool,
) -> ExportResult<()> {
    let lineups = read_lineups_json(&lineups)?;

    fantasy_draft::merge_lineups_csv(&lineups, &template, render_override(names_only))?;

    println!(
        "Merged {} lineups into: {}",
        lineups.len(),
        template.display()
    );
    Ok(())
}

/// Handle JSON export
fn handle_export_json(
    lineups: PathBuf,
    output: Option<PathBuf>,
    pretty: bool,
) -> ExportResult<()> {
    let lineups = read_lineups_json(&lineups)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExportError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            json::write_lineups_json(&lineups, &mut writer, pretty)?;
            println!("Exported {} lineups to: {}", lineups.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            json::write_lineups_json(&lineups, &mut writer, pretty)?;
            println!();
        }
    }

    Ok(())
}
