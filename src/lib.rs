//! dfs-lineup-export - Export daily-fantasy-sports lineups
//!
//! This library converts already-built lineups (ordered player-to-slot
//! assignments with aggregate salary and projection totals) into external
//! representations. Lineup construction and optimization happen elsewhere;
//! this crate only reads finalized lineups and writes them out.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (lineups, players, ids, salaries)
//! - `storage`: File I/O (lineups input, atomic CSV writes)
//! - `export`: The export formats (CSV, FantasyDraft template merge, JSON)
//! - `cli`: Command handlers for the `dfs-export` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use dfs_lineup_export::export::csv::export_lineups_csv;
//! use dfs_lineup_export::storage::read_lineups_json;
//!
//! let lineups = read_lineups_json("lineups.json")?;
//! export_lineups_csv(&lineups, std::io::stdout(), None)?;
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{ExportError, ExportResult};
