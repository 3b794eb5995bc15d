//! Core data models for dfs-lineup-export
//!
//! This module contains the data structures the exporters consume: lineups,
//! the players assigned into them, and their id and salary value types.

pub mod ids;
pub mod lineup;
pub mod player;
pub mod salary;

pub use ids::PlayerId;
pub use lineup::Lineup;
pub use player::LineupPlayer;
pub use salary::Salary;
