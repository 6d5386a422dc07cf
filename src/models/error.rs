//! Errors surfaced by tournament operations.

use crate::store::StorageError;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The persistence collaborator failed; propagated unchanged, no retries.
    Storage(StorageError),
    /// Pairing requires an even number of players; got this many.
    OddPlayerCount(usize),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::Storage(e) => write!(f, "storage error: {e}"),
            TournamentError::OddPlayerCount(n) => {
                write!(f, "cannot pair an odd number of players ({n})")
            }
        }
    }
}

impl std::error::Error for TournamentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TournamentError::Storage(e) => Some(e),
            TournamentError::OddPlayerCount(_) => None,
        }
    }
}

impl From<StorageError> for TournamentError {
    fn from(e: StorageError) -> Self {
        TournamentError::Storage(e)
    }
}
