//! Integration tests for registration and standings.

use swiss_tournament::{
    count_players, delete_matches, delete_players, player_standings, register_player,
    report_match, MemoryStore, PlayerId,
};

/// Fresh store with `n` registered players; returns the store and the ids.
fn store_with_players(n: usize) -> (MemoryStore, Vec<PlayerId>) {
    let mut store = MemoryStore::new();
    let ids = (0..n)
        .map(|i| register_player(&mut store, &format!("P{i}")).unwrap())
        .collect();
    (store, ids)
}

#[test]
fn empty_store_has_no_players_and_no_standings() {
    let store = MemoryStore::new();
    assert_eq!(count_players(&store).unwrap(), 0);
    assert!(player_standings(&store).unwrap().is_empty());
}

#[test]
fn registration_counts_and_assigns_unique_ids() {
    let (store, mut ids) = store_with_players(5);
    assert_eq!(count_players(&store).unwrap(), 5);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn duplicate_names_are_allowed() {
    let mut store = MemoryStore::new();
    let a = register_player(&mut store, "Markov").unwrap();
    let b = register_player(&mut store, "Markov").unwrap();
    assert_ne!(a, b);
    assert_eq!(count_players(&store).unwrap(), 2);
}

#[test]
fn players_without_matches_still_appear_with_zeros() {
    let (store, _) = store_with_players(3);
    let standings = player_standings(&store).unwrap();
    assert_eq!(standings.len(), 3);
    for row in &standings {
        assert_eq!(row.wins, 0);
        assert_eq!(row.matches, 0);
    }
}

#[test]
fn match_counts_sum_to_twice_reported_matches() {
    let (mut store, ids) = store_with_players(4);
    report_match(&mut store, ids[0], ids[1]).unwrap();
    report_match(&mut store, ids[2], ids[3]).unwrap();
    report_match(&mut store, ids[0], ids[2]).unwrap();

    let standings = player_standings(&store).unwrap();
    let total: u32 = standings.iter().map(|r| r.matches).sum();
    assert_eq!(total, 2 * 3);
    for row in &standings {
        assert!(row.wins <= row.matches);
    }
}

#[test]
fn standings_sort_by_wins_descending() {
    let (mut store, ids) = store_with_players(4);
    // P0 wins twice, P2 once, P1 and P3 never.
    report_match(&mut store, ids[0], ids[1]).unwrap();
    report_match(&mut store, ids[2], ids[3]).unwrap();
    report_match(&mut store, ids[0], ids[2]).unwrap();

    let standings = player_standings(&store).unwrap();
    let wins: Vec<u32> = standings.iter().map(|r| r.wins).collect();
    assert_eq!(wins, vec![2, 1, 0, 0]);
    assert_eq!(standings[0].id, ids[0]);
    assert_eq!(standings[1].id, ids[2]);
}

#[test]
fn tied_players_keep_registration_order() {
    let (mut store, ids) = store_with_players(4);
    report_match(&mut store, ids[0], ids[1]).unwrap();
    report_match(&mut store, ids[2], ids[3]).unwrap();

    let order: Vec<PlayerId> = player_standings(&store)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    // Winners tied at 1, losers tied at 0; each group in registration order.
    assert_eq!(order, vec![ids[0], ids[2], ids[1], ids[3]]);
}

#[test]
fn delete_matches_resets_standings_to_zero() {
    let (mut store, ids) = store_with_players(4);
    report_match(&mut store, ids[0], ids[1]).unwrap();
    report_match(&mut store, ids[2], ids[3]).unwrap();

    delete_matches(&mut store).unwrap();

    let standings = player_standings(&store).unwrap();
    assert_eq!(standings.len(), 4);
    for row in &standings {
        assert_eq!(row.wins, 0);
        assert_eq!(row.matches, 0);
    }
}

#[test]
fn delete_players_empties_the_tournament() {
    let (mut store, ids) = store_with_players(4);
    report_match(&mut store, ids[0], ids[1]).unwrap();

    delete_players(&mut store).unwrap();

    assert_eq!(count_players(&store).unwrap(), 0);
    assert!(player_standings(&store).unwrap().is_empty());
}
