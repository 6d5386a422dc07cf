//! The tournament operations a caller binds to: registration, match
//! reporting, standings, pairings, and bulk resets. Each is a short-lived
//! synchronous read or write against the store; all state lives there.

use crate::logic::pairing::pair_adjacent;
use crate::logic::standings::compute_standings;
use crate::models::{Pairing, PlayerId, StandingRow, TournamentError};
use crate::store::TournamentStore;
use log::{debug, info};

/// Remove all match records.
pub fn delete_matches<S: TournamentStore>(store: &mut S) -> Result<(), TournamentError> {
    store.clear_matches()?;
    info!("cleared all match records");
    Ok(())
}

/// Remove all player records (and with them, all matches).
pub fn delete_players<S: TournamentStore>(store: &mut S) -> Result<(), TournamentError> {
    store.clear_players()?;
    info!("cleared all player records");
    Ok(())
}

/// Number of players currently registered.
pub fn count_players<S: TournamentStore>(store: &S) -> Result<usize, TournamentError> {
    Ok(store.players()?.len())
}

/// Register a player; the store assigns the id.
pub fn register_player<S: TournamentStore>(
    store: &mut S,
    name: &str,
) -> Result<PlayerId, TournamentError> {
    let id = store.insert_player(name)?;
    debug!("registered player {id} ({name})");
    Ok(id)
}

/// Record the outcome of one match. Referential validity of the ids is the
/// store's to enforce; an unknown id surfaces as a storage error.
pub fn report_match<S: TournamentStore>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), TournamentError> {
    store.insert_match(winner, loser)?;
    debug!("recorded match: {winner} beat {loser}");
    Ok(())
}

/// Current standings: one row per registered player, sorted by wins
/// descending, registration order among ties.
pub fn player_standings<S: TournamentStore>(
    store: &S,
) -> Result<Vec<StandingRow>, TournamentError> {
    let players = store.players()?;
    let matches = store.matches()?;
    Ok(compute_standings(&players, &matches))
}

/// Next-round pairings: adjacent-ranked players from the current standings.
/// Requires an even player count.
pub fn swiss_pairings<S: TournamentStore>(store: &S) -> Result<Vec<Pairing>, TournamentError> {
    let standings = player_standings(store)?;
    let pairings = pair_adjacent(&standings)?;
    debug!("paired {} players into {} matches", standings.len(), pairings.len());
    Ok(pairings)
}
