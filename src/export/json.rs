//! JSON export functionality
//!
//! Builds an in-memory structure for machine consumers. Unlike the CSV
//! paths, player cells are raw ids (never rendered text) and the totals
//! stay numeric. Serializing and persisting the structure is the caller's
//! job; `write_lineups_json` is the convenience the CLI uses for that.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::models::{Lineup, PlayerId, Salary};

/// The exported lineups structure, shaped `{"lineups": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupExport {
    /// One entry per lineup, in input order
    pub lineups: Vec<ExportedLineup>,
}

/// A single lineup as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedLineup {
    /// Raw player ids in lineup order; `null` where a player has no id
    pub players: Vec<Option<PlayerId>>,

    /// Total salary spent, as a number
    #[serde(rename = "totalSalary")]
    pub total_salary: Salary,

    /// Total projected fantasy points, as a number
    #[serde(rename = "totalFppg")]
    pub total_fppg: f64,
}

impl LineupExport {
    /// Build the export structure from finalized lineups
    pub fn from_lineups(lineups: &[Lineup]) -> Self {
        let lineups = lineups
            .iter()
            .map(|lineup| ExportedLineup {
                players: lineup.players.iter().map(|p| p.id).collect(),
                total_salary: lineup.salary_costs,
                total_fppg: lineup.fantasy_points_projection,
            })
            .collect();

        Self { lineups }
    }
}

/// Serialize the lineups to JSON on a writer
pub fn write_lineups_json<W: Write>(
    lineups: &[Lineup],
    writer: &mut W,
    pretty: bool,
) -> ExportResult<()> {
    let export = LineupExport::from_lineups(lineups);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExportError::Export(e.to_string()))?;

    Ok(())
}
