//! Custom error types for dfs-lineup-export
//!
//! This module defines the error hierarchy for the exporter using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Errors loading the lineups input file
    #[error("Import error: {0}")]
    Import(String),

    /// Errors producing an export
    #[error("Export error: {0}")]
    Export(String),

    /// Errors in the file write-back path
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExportError {
    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }

    /// Check if this is an export error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
