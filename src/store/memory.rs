//! In-memory store: Vec-backed, serial ids, same contract a SQL backend
//! would honor (registration order, referential checks on match inserts).

use crate::models::{MatchRecord, Player, PlayerId};
use crate::store::{StorageError, TournamentStore};

/// In-memory `TournamentStore`. Registration order is insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_id: PlayerId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

impl TournamentStore for MemoryStore {
    fn players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.players.clone())
    }

    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.matches.clone())
    }

    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError> {
        self.next_id += 1;
        let id = self.next_id;
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), StorageError> {
        if !self.has_player(winner) {
            return Err(StorageError::UnknownPlayer(winner));
        }
        if !self.has_player(loser) {
            return Err(StorageError::UnknownPlayer(loser));
        }
        self.matches.push(MatchRecord::new(winner, loser));
        Ok(())
    }

    fn clear_players(&mut self) -> Result<(), StorageError> {
        // Matches reference players; dropping the players drops the matches.
        self.matches.clear();
        self.players.clear();
        Ok(())
    }

    fn clear_matches(&mut self) -> Result<(), StorageError> {
        self.matches.clear();
        Ok(())
    }
}
