//! Player and StandingRow data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned serially by the store.
pub type PlayerId = i64;

/// A registered player. Created on registration, never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Full name as registered (need not be unique).
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One row of the standings: a player's win record (derived, never stored).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    /// Matches this player has won.
    pub wins: u32,
    /// Matches this player has played (won or lost). Always >= wins.
    pub matches: u32,
}
