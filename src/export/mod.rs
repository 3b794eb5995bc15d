//! Export module for dfs-lineup-export
//!
//! Converts finalized lineups into external representations:
//! - CSV: header plus one row per lineup (spreadsheet-compatible)
//! - FantasyDraft: merge into an existing upload template CSV
//! - JSON: machine-readable structure with raw player ids
//!
//! All formats share the player rendering contract defined here.

pub mod csv;
pub mod fantasy_draft;
pub mod json;

pub use self::csv::export_lineups_csv;
pub use self::fantasy_draft::merge_lineups_csv;
pub use self::json::{write_lineups_json, ExportedLineup, LineupExport};

use crate::models::LineupPlayer;

/// A player-to-cell rendering function
///
/// The CSV exporters accept an optional override of this shape; when
/// supplied it fully replaces [`render_player`] for that call.
pub type RenderFn = dyn Fn(&LineupPlayer) -> String;

/// Default textual representation of a player
///
/// `"<full_name>"`, or `"<full_name>(<id>)"` when the player carries an id.
pub fn render_player(player: &LineupPlayer) -> String {
    match player.id {
        Some(id) => format!("{}({})", player.full_name, id),
        None => player.full_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    #[test]
    fn test_render_player_with_id() {
        let player = LineupPlayer::new("A", PlayerId::new(1), "QB");
        assert_eq!(render_player(&player), "A(1)");
    }

    #[test]
    fn test_render_player_without_id() {
        let player = LineupPlayer::without_id("A", "QB");
        assert_eq!(render_player(&player), "A");
    }
}
