//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the export layer.

pub mod export;

pub use export::{handle_export_command, ExportCommands};
