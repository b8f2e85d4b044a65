//! Simulate command - Batch computer-vs-computer games

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    cli::output::{create_game_progress, print_kv, print_section},
    wild::{Game, Mark, Outcome, Player, PlayerCommand},
};

#[derive(Parser, Debug)]
#[command(about = "Simulate computer-vs-computer games")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,
}

/// Aggregated outcomes of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStats {
    pub games: usize,
    pub x_lines: usize,
    pub o_lines: usize,
    pub draws: usize,
    pub total_moves: usize,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(random);
    let pb = (!args.quiet).then(|| create_game_progress(args.games as u64));

    let stats = run_simulation(args.games, seed, |_| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    print_section("Simulation Results");
    print_kv("Games", &stats.games.to_string());
    print_kv("Seed", &seed.to_string());
    print_kv(
        "X lines",
        &format!("{} ({:.1}%)", stats.x_lines, percentage(stats.x_lines, stats.games)),
    );
    print_kv(
        "O lines",
        &format!("{} ({:.1}%)", stats.o_lines, percentage(stats.o_lines, stats.games)),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", stats.draws, percentage(stats.draws, stats.games)),
    );
    if stats.games > 0 {
        print_kv(
            "Avg game length",
            &format!("{:.2} moves", stats.total_moves as f64 / stats.games as f64),
        );
    }

    Ok(())
}

/// Play `games` random-vs-random games and tally how each ended.
///
/// Each game gets its own seeded players derived from the master seed, so a
/// run is fully reproducible.
fn run_simulation(
    games: usize,
    seed: u64,
    mut on_game_finished: impl FnMut(usize),
) -> crate::Result<SimulationStats> {
    let mut master = StdRng::seed_from_u64(seed);
    let mut stats = SimulationStats {
        games,
        x_lines: 0,
        o_lines: 0,
        draws: 0,
        total_moves: 0,
    };

    for game_index in 0..games {
        let mut game = Game::new(
            Player::computer("Computer 1", Some(master.random())),
            Player::computer("Computer 2", Some(master.random())),
        );

        while !game.is_over() {
            let command = game
                .auto_command()
                .expect("computer players always produce a command")?;
            match command {
                PlayerCommand::Place(mv) => game.play(mv)?,
                PlayerCommand::Act(_) => unreachable!("computer players never issue actions"),
            }
        }

        match game.outcome() {
            Some(Outcome::ThreeInRow(Mark::X)) => stats.x_lines += 1,
            Some(Outcome::ThreeInRow(Mark::O)) => stats.o_lines += 1,
            Some(Outcome::Draw) => stats.draws += 1,
            None => unreachable!("finished game must have an outcome"),
        }
        stats.total_moves += game.history().len();
        on_game_finished(game_index);
    }

    Ok(stats)
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
