//! Persistence collaborator: the narrow interface the tournament logic reads
//! and writes through. Any storage technology can back it; the crate ships an
//! in-memory implementation for tests and small deployments.

mod memory;

pub use memory::MemoryStore;

use crate::models::{MatchRecord, Player, PlayerId};

/// Errors raised by a store implementation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// A match referenced a player id that is not registered.
    UnknownPlayer(PlayerId),
    /// The backing store is unreachable or a read/write failed.
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::UnknownPlayer(id) => write!(f, "no registered player with id {id}"),
            StorageError::Backend(msg) => write!(f, "store backend failure: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// The store owns all tournament state; the logic layer holds none.
///
/// `players` must yield players in registration order. That order is the
/// defined tie-break among equal-win players in the standings, so a store
/// that returned players in arbitrary order would make pairings unstable.
pub trait TournamentStore {
    /// All registered players, in registration order.
    fn players(&self) -> Result<Vec<Player>, StorageError>;

    /// All recorded match outcomes.
    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError>;

    /// Add a player; the store assigns and returns a fresh unique id.
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError>;

    /// Record one match outcome. Implementations reject ids that reference
    /// no registered player with `StorageError::UnknownPlayer`.
    fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), StorageError>;

    /// Remove all players. Matches reference players, so implementations
    /// clear those too rather than keep dangling ids.
    fn clear_players(&mut self) -> Result<(), StorageError>;

    /// Remove all match records, leaving players registered.
    fn clear_matches(&mut self) -> Result<(), StorageError>;
}
