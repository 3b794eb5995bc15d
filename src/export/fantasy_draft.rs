//! FantasyDraft template merge export
//!
//! FantasyDraft upload files already exist before an export: the site
//! hands out a template whose first row describes the slate and whose
//! columns beyond the roster carry contest metadata. Exporting means
//! writing player names into the leading columns of rows 1..=N while
//! leaving everything else in the file alone.

use std::path::Path;

use crate::error::{ExportError, ExportResult};
use crate::models::Lineup;
use crate::storage::{read_csv_rows, write_rows_atomic};

/// Merge lineups into an existing FantasyDraft template CSV
///
/// Row 0 is the template header and is preserved verbatim. Lineup `k`
/// (1-based) lands on row `k`: its rendered player names replace the
/// leading columns while any cells beyond the first lineup's player count
/// are kept intact. Rows missing from a short template are appended.
/// Rows left over from a previous, longer export run have their leading
/// player columns blanked, except the final row of the file, which is
/// treated as a footer and never touched.
///
/// An empty lineup sequence is a no-op: the file is not read or written.
/// The write-back replaces the file via temp-file-plus-rename, so a
/// failure mid-write leaves the original template intact. External
/// modification of the file between the read and the write is a race this
/// exporter does not defend against.
pub fn merge_lineups_csv<P: AsRef<Path>>(
    lineups: &[Lineup],
    path: P,
    render_func: Option<&super::RenderFn>,
) -> ExportResult<()> {
    if lineups.is_empty() {
        return Ok(());
    }

    let render = render_func.unwrap_or(&super::render_player);
    let path = path.as_ref();

    let mut rows = read_csv_rows(path)?;
    if rows.is_empty() {
        return Err(ExportError::Export(format!(
            "Template file is empty: {}",
            path.display()
        )));
    }

    let mut total_players = 0;
    let mut last_written = 0;

    for (index, lineup) in lineups.iter().enumerate() {
        let row = index + 1;
        if row >= rows.len() {
            rows.push(Vec::new());
        }

        let names: Vec<String> = lineup.players.iter().map(|p| render(p)).collect();
        if total_players == 0 {
            total_players = names.len();
        }

        // Tail-preserving splice: trailing metadata cells stay in place
        let old = std::mem::take(&mut rows[row]);
        let mut new_row = names;
        new_row.extend(old.into_iter().skip(total_players));
        rows[row] = new_row;

        last_written = row;
    }

    // Clear stale player data from previously longer export runs; the final
    // row of the file is a sentinel/footer and stays untouched
    let last_file_row = rows.len() - 1;
    for row in (last_written + 1)..last_file_row {
        let old = std::mem::take(&mut rows[row]);
        let mut blanked = vec![String::new(); total_players];
        blanked.extend(old.into_iter().skip(total_players));
        rows[row] = blanked;
    }

    write_rows_atomic(path, &rows)
}
