//! CSV export functionality
//!
//! Writes lineups as a fresh CSV document: a header row built from the
//! first lineup's roster slots, then one row per lineup.

use std::io::Write;

use crate::error::ExportResult;
use crate::models::Lineup;

use super::{render_player, RenderFn};

/// Export lineups to CSV
///
/// The header row carries the first lineup's `lineup_position` labels in
/// order, followed by the literal `Budget` and `FPPG` columns. Each data
/// row carries the rendered player cells, then the salary and projection
/// totals as text.
///
/// Every lineup is assumed to share the first lineup's roster structure;
/// this is not re-validated per row, so a later lineup with a different
/// player count produces a misaligned row. Empty input produces empty
/// output (the header is only emitted ahead of the first lineup).
pub fn export_lineups_csv<W: Write>(
    lineups: &[Lineup],
    writer: W,
    render_func: Option<&RenderFn>,
) -> ExportResult<()> {
    let render = render_func.unwrap_or(&render_player);
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (index, lineup) in lineups.iter().enumerate() {
        if index == 0 {
            let mut header: Vec<&str> = lineup.positions().collect();
            header.push("Budget");
            header.push("FPPG");
            csv_writer.write_record(&header)?;
        }

        let mut row: Vec<String> = lineup.players.iter().map(|p| render(p)).collect();
        row.push(lineup.salary_costs.to_string());
        row.push(lineup.fantasy_points_projection.to_string());
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineupPlayer, PlayerId, Salary};

    fn sample_lineups() -> Vec<Lineup> {
        vec![
            Lineup::new(
                vec![
                    LineupPlayer::new("A", PlayerId::new(1), "QB"),
                    LineupPlayer::new("B", PlayerId::new(2), "RB"),
                ],
                Salary::from_dollars(100),
                20.5,
            ),
            Lineup::new(
                vec![
                    LineupPlayer::new("C", PlayerId::new(3), "QB"),
                    LineupPlayer::without_id("D", "RB"),
                ],
                Salary::from_dollars(95),
                18.0,
            ),
        ]
    }

    fn export_to_string(lineups: &[Lineup], render_func: Option<&RenderFn>) -> String {
        let mut output = Vec::new();
        export_lineups_csv(lineups, &mut output, render_func).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_and_row_counts() {
        let csv_string = export_to_string(&sample_lineups(), None);
        let rows: Vec<&str> = csv_string.lines().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "QB,RB,Budget,FPPG");
    }

    #[test]
    fn test_row_contents() {
        let csv_string = export_to_string(&sample_lineups(), None);
        let rows: Vec<&str> = csv_string.lines().collect();

        assert_eq!(rows[1], "A(1),B(2),100,20.5");
        assert_eq!(rows[2], "C(3),D,95,18");
    }

    #[test]
    fn test_custom_render_function_replaces_player_cells() {
        let upper = |p: &LineupPlayer| p.full_name.to_uppercase();
        let csv_string = export_to_string(&sample_lineups(), Some(&upper));
        let rows: Vec<&str> = csv_string.lines().collect();

        assert_eq!(rows[1], "A,B,100,20.5");
        // Budget/FPPG columns unaffected by the override
        assert_eq!(rows[0], "QB,RB,Budget,FPPG");
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        assert_eq!(export_to_string(&[], None), "");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let lineups = vec![Lineup::new(
            vec![LineupPlayer::new("Last, First", PlayerId::new(9), "QB")],
            Salary::from_dollars(50),
            10.0,
        )];
        let csv_string = export_to_string(&lineups, None);
        assert_eq!(csv_string.lines().nth(1).unwrap(), "\"Last, First(9)\",50,10");
    }
}
