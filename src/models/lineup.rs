//! Lineup model
//!
//! A finalized set of player-to-roster-slot assignments plus aggregate
//! salary and projection totals. Player order is significant and stable:
//! the same lineup exported twice yields the same column order.

use serde::{Deserialize, Serialize};

use super::player::LineupPlayer;
use super::salary::Salary;

/// A finalized lineup as produced by an optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    /// Players in roster-slot order
    pub players: Vec<LineupPlayer>,

    /// Total salary spent on the lineup
    pub salary_costs: Salary,

    /// Total projected fantasy points (FPPG)
    pub fantasy_points_projection: f64,
}

impl Lineup {
    /// Create a lineup from its players and aggregate totals
    pub fn new(players: Vec<LineupPlayer>, salary_costs: Salary, projection: f64) -> Self {
        Self {
            players,
            salary_costs,
            fantasy_points_projection: projection,
        }
    }

    /// Roster slot labels in lineup order
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.lineup_position.as_str())
    }

    /// Number of roster slots in the lineup
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check whether the lineup has no players
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
