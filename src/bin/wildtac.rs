//! Wild Tic-Tac-Toe CLI
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games (human vs human, human vs computer)
//! - Replaying saved games move by move
//! - Simulating batches of computer-vs-computer games
//! - Exporting saved move lists for further analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wildtac")]
#[command(version, about = "Wild Tic-Tac-Toe for the console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(wildtac::cli::commands::play::PlayArgs),

    /// Replay a saved game move by move
    Replay(wildtac::cli::commands::replay::ReplayArgs),

    /// Simulate computer-vs-computer games
    Simulate(wildtac::cli::commands::simulate::SimulateArgs),

    /// Export a saved game's move list to CSV
    Export(wildtac::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => wildtac::cli::commands::play::execute(args),
        Commands::Replay(args) => wildtac::cli::commands::replay::execute(args),
        Commands::Simulate(args) => wildtac::cli::commands::simulate::execute(args),
        Commands::Export(args) => wildtac::cli::commands::export::execute(args),
    }
}
