//! Match records and pairings.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Outcome of a single match between two players. Immutable once recorded;
/// there are no draws, every match has exactly one winner and one loser.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }

    /// Whether the given player took part in this match, on either side.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.winner == id || self.loser == id
    }
}

/// One next-round pairing of two adjacent-ranked players (derived, never stored).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id_1: PlayerId,
    pub name_1: String,
    pub id_2: PlayerId,
    pub name_2: String,
}
