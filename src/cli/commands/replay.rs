//! Replay command - Step through a saved game move by move

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    wild::{Board, Move, SaveState},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a saved game move by move")]
pub struct ReplayArgs {
    /// Path to the save file
    pub file: PathBuf,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let state = SaveState::load_from_file(&args.file)?;

    print_section(&format!("Replay: {}", args.file.display()));
    print_kv("Player 1", &state.player1_name);
    print_kv("Player 2", &state.player2_name);
    print_kv("Next to move", &state.current_player_name);
    print_kv("Moves", &state.moves.len().to_string());

    let mut board = Board::new();
    println!("\n{board}");

    for (step, saved) in state.moves.iter().enumerate() {
        let mv = Move::from(*saved);
        board
            .apply_move(mv)
            .with_context(|| format!("saved move at step {step} does not replay"))?;
        println!("\nStep {}: {mv}", step + 1);
        println!("{board}");
    }

    println!();
    match board.winning_mark() {
        Some(mark) => print_kv("Result", &format!("three {mark}'s in a row")),
        None if board.is_full() => print_kv("Result", "draw (board full)"),
        None => print_kv("Result", "game still in progress"),
    }

    Ok(())
}
