//! Tournament business logic: standings, pairing, and the public operations.

mod ops;
mod pairing;
mod standings;

pub use ops::{
    count_players, delete_matches, delete_players, player_standings, register_player,
    report_match, swiss_pairings,
};
pub use pairing::pair_adjacent;
pub use standings::compute_standings;
