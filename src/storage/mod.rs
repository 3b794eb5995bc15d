//! Storage layer for dfs-lineup-export
//!
//! Provides the file I/O the exporters sit on: lineups JSON input and
//! atomic CSV row writes.

pub mod file_io;

pub use file_io::{read_csv_rows, read_lineups_json, write_rows_atomic};
