//! Swiss pairing: group adjacent-ranked players for the next round.

use crate::models::{Pairing, StandingRow, TournamentError};

/// Pair the ranked standings two at a time: rank 1 with rank 2, rank 3 with
/// rank 4, and so on. Adjacent ranks approximate "equal or nearly-equal win
/// record" without solving a full matching problem.
///
/// Every player appears in exactly one pairing. The result is deterministic
/// for a fixed ranking order; among tied-wins players that order is the
/// standings tie-break (registration order).
///
/// Returns `TournamentError::OddPlayerCount` when the ranking has an odd
/// number of rows. Byes are not supported, so dropping or duplicating the
/// leftover player is never acceptable.
pub fn pair_adjacent(standings: &[StandingRow]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }
    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing {
            id_1: pair[0].id,
            name_1: pair[0].name.clone(),
            id_2: pair[1].id,
            name_2: pair[1].name.clone(),
        })
        .collect();
    Ok(pairings)
}
