//! Standings: per-player win records, ranked by wins.

use crate::models::{MatchRecord, Player, StandingRow};

/// Compute the ranked standings for the given players and match records.
///
/// One row per player, wins descending. Players that have not played yet get
/// `wins = 0, matches = 0` and still appear; an empty player list yields an
/// empty result. The sort is stable, so equal-win players keep the order the
/// store listed them in (registration order) as the defined tie-break.
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = players
        .iter()
        .map(|p| StandingRow {
            id: p.id,
            name: p.name.clone(),
            wins: matches.iter().filter(|m| m.winner == p.id).count() as u32,
            matches: matches.iter().filter(|m| m.involves(p.id)).count() as u32,
        })
        .collect();
    rows.sort_by_key(|row| std::cmp::Reverse(row.wins));
    rows
}
