//! Data structures for the tournament: players, match records, derived views.

mod error;
mod game;
mod player;

pub use error::TournamentError;
pub use game::{MatchRecord, Pairing};
pub use player::{Player, PlayerId, StandingRow};
