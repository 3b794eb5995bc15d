//! Lineup player model
//!
//! A player as placed into a finalized lineup: display name, optional
//! site-assigned id, and the roster slot the player fills.

use serde::{Deserialize, Serialize};

use super::ids::PlayerId;

/// A player occupying one roster slot of a finalized lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupPlayer {
    /// Player display name
    pub full_name: String,

    /// Site-assigned id; absent for players the slate has no id for
    #[serde(default)]
    pub id: Option<PlayerId>,

    /// Label of the roster slot this player fills (e.g. "QB", "FLEX")
    pub lineup_position: String,
}

impl LineupPlayer {
    /// Create a player with an id
    pub fn new(
        full_name: impl Into<String>,
        id: PlayerId,
        lineup_position: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            id: Some(id),
            lineup_position: lineup_position.into(),
        }
    }

    /// Create a player without an id
    pub fn without_id(full_name: impl Into<String>, lineup_position: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            id: None,
            lineup_position: lineup_position.into(),
        }
    }
}
