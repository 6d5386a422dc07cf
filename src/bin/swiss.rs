//! Demo binary: runs a small in-memory tournament round and prints standings
//! and next-round pairings as JSON. Run with: cargo run --bin swiss
//! Set RUST_LOG=debug to see per-operation logging.

use std::process::ExitCode;
use swiss_tournament::{
    player_standings, register_player, report_match, swiss_pairings, MemoryStore, TournamentError,
};

fn run() -> Result<(), TournamentError> {
    let mut store = MemoryStore::new();

    let names = ["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"];
    let ids: Vec<_> = names
        .iter()
        .map(|name| register_player(&mut store, name))
        .collect::<Result<_, _>>()?;

    // Round one: 1 beats 2, 3 beats 4.
    report_match(&mut store, ids[0], ids[1])?;
    report_match(&mut store, ids[2], ids[3])?;

    let standings = player_standings(&store)?;
    let pairings = swiss_pairings(&store)?;

    println!(
        "{}",
        serde_json::json!({ "standings": standings, "pairings": pairings })
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
