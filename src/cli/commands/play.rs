//! Play command - Interactive Wild Tic-Tac-Toe session

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use crate::wild::{
    DEFAULT_SAVE_PATH, Game, Mark, Outcome, Player, PlayerAction, PlayerCommand,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Play mode
    #[arg(long, value_enum, default_value_t = PlayMode::HumanVsHuman)]
    pub mode: PlayMode,

    /// First player's name (moves first)
    #[arg(long, default_value = "Player 1")]
    pub player1: String,

    /// Second player's name (the computer in human-vs-computer mode)
    #[arg(long, default_value = "Player 2")]
    pub player2: String,

    /// Random seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Resume from a previously saved game
    #[arg(long)]
    pub load: Option<PathBuf>,
}

/// Who sits in each seat
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    HumanVsHuman,
    HumanVsComputer,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(args, &mut stdin.lock(), &mut stdout.lock())
}

/// The turn loop, written against generic IO handles so scripted input can
/// drive it in tests.
fn run<R: BufRead, W: Write>(args: PlayArgs, input: &mut R, out: &mut W) -> Result<()> {
    let mut game = match args.mode {
        PlayMode::HumanVsHuman => {
            Game::new(Player::human(&args.player1), Player::human(&args.player2))
        }
        PlayMode::HumanVsComputer => Game::new(
            Player::human(&args.player1),
            Player::computer(&args.player2, args.seed),
        ),
    };

    writeln!(out, "=== Wild Tic-Tac-Toe ===")?;

    if let Some(path) = &args.load {
        game.load(path)
            .with_context(|| format!("failed to resume from '{}'", path.display()))?;
        writeln!(out, "Loaded game from: {}", path.display())?;
    }

    print_help(out)?;
    writeln!(out, "{}", game.board())?;

    while !game.is_over() {
        let command = match game.auto_command() {
            Some(result) => {
                let command = result?;
                if let PlayerCommand::Place(mv) = &command {
                    writeln!(out, "Computer {} plays {mv}", game.current_player().name())?;
                }
                command
            }
            None => {
                let name = game.current_player().name().to_string();
                match prompt_command(&name, input, out)? {
                    Some(command) => command,
                    None => bail!("input closed before the game finished"),
                }
            }
        };

        match command {
            PlayerCommand::Place(mv) => {
                if !game.board().is_move_valid(mv) {
                    writeln!(out, "That move is not valid. Try again.")?;
                    continue;
                }
                game.play(mv)?;
                writeln!(out, "{}", game.board())?;
            }
            PlayerCommand::Act(PlayerAction::Undo) => {
                if game.undo()?.is_some() {
                    writeln!(out, "{}", game.board())?;
                } else {
                    writeln!(out, "There is nothing to undo.")?;
                }
            }
            PlayerCommand::Act(PlayerAction::Redo) => {
                if game.redo()?.is_some() {
                    writeln!(out, "{}", game.board())?;
                } else {
                    writeln!(out, "There is nothing to redo.")?;
                }
            }
            PlayerCommand::Act(PlayerAction::Save(path)) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
                match game.save(&path) {
                    Ok(()) => writeln!(out, "Saved game to: {}", path.display())?,
                    Err(err) => writeln!(out, "Failed to save: {err}")?,
                }
            }
            PlayerCommand::Act(PlayerAction::Load(path)) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
                match game.load(&path) {
                    Ok(()) => {
                        writeln!(out, "Loaded game from: {}", path.display())?;
                        writeln!(out, "{}", game.board())?;
                    }
                    Err(err) => writeln!(out, "Failed to load: {err}")?,
                }
            }
            PlayerCommand::Act(PlayerAction::Help) => print_help(out)?,
        }
    }

    writeln!(out, "=================")?;
    writeln!(out, "=== GAME OVER ===")?;
    writeln!(out, "=================")?;
    writeln!(out, "{}", game.board())?;
    match game.outcome() {
        Some(Outcome::ThreeInRow(Mark::X)) => writeln!(out, "Three X's in a row!")?,
        Some(Outcome::ThreeInRow(Mark::O)) => writeln!(out, "Three O's in a row!")?,
        Some(Outcome::Draw) => writeln!(out, "The board is full: a draw.")?,
        None => {}
    }

    Ok(())
}

/// Prompt until the player enters a parseable command.
///
/// Returns `None` when the input source closes. Parse failures print the
/// error and re-prompt; they never end the session.
fn prompt_command<R: BufRead, W: Write>(
    name: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<PlayerCommand>> {
    loop {
        write!(
            out,
            "{name}, enter a move (row,col,mark) or an action (--undo/--redo/--save [path]/--load [path]/--help): "
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.trim().parse::<PlayerCommand>() {
            Ok(command) => return Ok(Some(command)),
            Err(err) => writeln!(out, "{err}. Try again.")?,
        }
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "How to play:")?;
    writeln!(out, " - Coordinates are 0..2 for row and column.")?;
    writeln!(out, " - In Wild Tic-Tac-Toe you may place either X or O on your turn.")?;
    writeln!(
        out,
        " - The game ends when any 3-in-a-row of X or of O is formed, or the board is full."
    )?;
    writeln!(out, " - On your turn, enter: row,col,mark  e.g. 1,2,X")?;
    writeln!(out, " - Enter --undo to undo the previous move.")?;
    writeln!(out, " - Enter --redo to redo an undone move.")?;
    writeln!(out, " - Enter --save [path] to save the game anytime.")?;
    writeln!(out, " - Enter --load [path] to load a saved game.")?;
    writeln!(out, " - Enter --help to show this help.")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn play_args() -> PlayArgs {
        PlayArgs {
            mode: PlayMode::HumanVsHuman,
            player1: "Alice".to_string(),
            player2: "Ida".to_string(),
            seed: None,
            load: None,
        }
    }

    fn run_script(args: PlayArgs, script: &str) -> (Result<()>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(args, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scripted_game_runs_to_completion() {
        // Either player may place X, so three moves finish the top row
        let (result, output) = run_script(play_args(), "0,0,X\n0,1,X\n0,2,X\n");
        result.unwrap();
        assert!(output.contains("=== GAME OVER ==="));
        assert!(output.contains("Three X's in a row!"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let script = "garbage\n--quit\n0,0,O\n1,0,O\n2,2,X\n1,1,O\n1,2,O\n";
        // After the two rejected lines, O completes row 1: (1,0),(1,1),(1,2)
        let (result, output) = run_script(play_args(), script);
        result.unwrap();
        assert!(output.contains("invalid move"), "missing parse error: {output}");
        assert!(output.contains("unknown action"), "missing action error: {output}");
        assert!(output.contains("Three O's in a row!"));
    }

    #[test]
    fn test_occupied_cell_keeps_the_turn() {
        let script = "1,1,X\n1,1,O\n0,0,X\n2,2,X\n0,1,X\n0,2,X\n";
        // Second line targets the occupied center and is rejected; the same
        // player then plays 0,0. X completes the main diagonal at 2,2.
        let (result, output) = run_script(play_args(), script);
        result.unwrap();
        assert!(output.contains("That move is not valid. Try again."));
        assert!(output.contains("=== GAME OVER ==="));
    }

    #[test]
    fn test_undo_with_empty_history_reports_nothing() {
        let script = "--undo\n0,0,X\n0,1,X\n0,2,X\n";
        let (result, output) = run_script(play_args(), script);
        result.unwrap();
        assert!(output.contains("There is nothing to undo."));
    }

    #[test]
    fn test_undo_redo_cycle() {
        // --redo right after a fresh move reports an empty redo history;
        // the applied moves (0,0,O), (0,1,O), (0,2,O) then finish row 0.
        let script = "1,1,X\n--undo\n--redo\n0,0,O\n--redo\n1,0,X\n0,1,O\n0,2,O\n";
        let (result, output) = run_script(play_args(), script);
        result.unwrap();
        assert!(output.contains("There is nothing to redo."));
        assert!(output.contains("Three O's in a row!"));
    }

    #[test]
    fn test_eof_before_game_over_is_an_error() {
        let (result, _) = run_script(play_args(), "0,0,X\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_within_a_session() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("mid-game.json");
        let script = format!(
            "1,1,X\n--save {p}\n2,2,O\n--load {p}\n0,0,X\n0,1,X\n1,0,O\n0,2,X\n",
            p = path.display()
        );
        // Loading drops the (2,2,O) move and returns the turn to Ida (the
        // player after X's only saved move); X finishes the top row.
        let (result, output) = run_script(play_args(), &script);
        result.unwrap();
        assert!(output.contains("Saved game to:"));
        assert!(output.contains("Loaded game from:"));
        assert!(output.contains("Three X's in a row!"));
    }

    #[test]
    fn test_computer_opponent_plays_to_completion() {
        let args = PlayArgs {
            mode: PlayMode::HumanVsComputer,
            player1: "Alice".to_string(),
            player2: "Computer".to_string(),
            seed: Some(42),
            load: None,
        };
        // Cycle every cell in row-major order; occupied cells are rejected
        // with a re-prompt, and any 9 consecutive lines cover at least one
        // vacant cell while the board is not full, so five cycles always
        // outlast the at-most-nine placements of a game.
        let cycle = "0,0,X\n0,1,X\n0,2,X\n1,0,X\n1,1,X\n1,2,X\n2,0,X\n2,1,X\n2,2,X\n";
        let script = cycle.repeat(5);
        let (result, output) = run_script(args, &script);
        result.unwrap();
        assert!(output.contains("Computer Computer plays"));
        assert!(output.contains("=== GAME OVER ==="));
    }
}
