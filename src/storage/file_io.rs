//! File I/O utilities with atomic writes
//!
//! Provides the exporter's file operations: loading finalized lineups from
//! JSON and writing CSV rows without corrupting data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{ExportError, ExportResult};
use crate::models::Lineup;

/// Read finalized lineups from a JSON file, erroring if the file is missing
pub fn read_lineups_json<P: AsRef<Path>>(path: P) -> ExportResult<Vec<Lineup>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Import(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| ExportError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ExportError::Import(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a CSV file into rows of string cells
///
/// Rows may have unequal field counts; row 0 is returned like any other row.
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> ExportResult<Vec<Vec<String>>> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ExportError::Csv(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| ExportError::Csv(format!("Failed to read {}: {}", path.display(), e)))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Write CSV rows to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing corruption on crashes or power failures.
pub fn write_rows_atomic<P: AsRef<Path>>(path: P, rows: &[Vec<String>]) -> ExportResult<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExportError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExportError::Storage(format!("Failed to create temp file: {}", e)))?;

    // Rows may carry unequal field counts (tail-preserving splices)
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::new(file));

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| ExportError::Storage(format!("Failed to write rows: {}", e)))?;
    }

    let buffered = writer
        .into_inner()
        .map_err(|e| ExportError::Storage(format!("Failed to flush rows: {}", e)))?;

    let file = buffered
        .into_inner()
        .map_err(|e| ExportError::Storage(format!("Failed to flush rows: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| ExportError::Storage(format!("Failed to sync rows: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        ExportError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineupPlayer, PlayerId, Salary};
    use tempfile::TempDir;

    #[test]
    fn test_read_lineups_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = read_lineups_json(&path).unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("nonexistent.json"));
    }

    #[test]
    fn test_read_lineups_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_lineups_json(&path).unwrap_err();
        assert!(err.is_import());
    }

    #[test]
    fn test_read_lineups_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lineups.json");

        let lineups = vec![Lineup::new(
            vec![LineupPlayer::new("A", PlayerId::new(1), "QB")],
            Salary::from_dollars(100),
            20.5,
        )];
        fs::write(&path, serde_json::to_string(&lineups).unwrap()).unwrap();

        let loaded = read_lineups_json(&path).unwrap();
        assert_eq!(loaded, lineups);
    }

    #[test]
    fn test_write_and_read_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        let rows = vec![
            vec!["QB".to_string(), "RB".to_string(), "Slate".to_string()],
            vec!["A(1)".to_string(), "B(2)".to_string()],
        ];

        write_rows_atomic(&path, &rows).unwrap();
        let loaded = read_csv_rows(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        let temp_path = temp_dir.path().join("rows.csv.tmp");

        write_rows_atomic(&path, &[vec!["a".to_string()]]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("rows.csv");

        write_rows_atomic(&path, &[vec!["a".to_string()]]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_rows_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(matches!(
            read_csv_rows(&path),
            Err(ExportError::Csv(_))
        ));
    }
}
