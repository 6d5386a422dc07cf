//! Swiss-system tournament: library with models, a pluggable store, and the
//! standings/pairing logic. Players with similar win records are matched each
//! round by pairing adjacent entries in the ranked standings.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    compute_standings, count_players, delete_matches, delete_players, pair_adjacent,
    player_standings, register_player, report_match, swiss_pairings,
};
pub use models::{MatchRecord, Pairing, Player, PlayerId, StandingRow, TournamentError};
pub use store::{MemoryStore, StorageError, TournamentStore};
