//! Player command vocabulary and free-text parsing

use std::{path::PathBuf, str::FromStr};

use super::board::Move;

/// Default save file name when `--save`/`--load` is given no path
pub const DEFAULT_SAVE_PATH: &str = "wild-tic-tac-toe.json";

/// An out-of-turn action a player may take instead of moving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Undo,
    Redo,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
}

/// A single command issued by a player: place a move, or take an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Place(Move),
    Act(PlayerAction),
}

impl FromStr for PlayerCommand {
    type Err = crate::Error;

    /// Parse console input.
    ///
    /// Input starting with `--` is an action token (`--undo`, `--redo`,
    /// `--save [path]`, `--load [path]`, `--help`), matched
    /// case-insensitively with an optional single path argument. Anything
    /// else is parsed as a `row,column,mark` move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAction`] for an unrecognized `--` token and
    /// [`Error::ParseMove`] for malformed move text. Both are recoverable:
    /// the front end reports the message and re-prompts.
    ///
    /// [`Error::UnknownAction`]: crate::Error::UnknownAction
    /// [`Error::ParseMove`]: crate::Error::ParseMove
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.starts_with("--") {
            let (token, arg) = match trimmed.split_once(char::is_whitespace) {
                Some((token, rest)) => (token, Some(rest.trim())),
                None => (trimmed, None),
            };
            let arg = arg.filter(|a| !a.is_empty()).map(PathBuf::from);

            return match token.to_lowercase().as_str() {
                "--undo" => Ok(PlayerCommand::Act(PlayerAction::Undo)),
                "--redo" => Ok(PlayerCommand::Act(PlayerAction::Redo)),
                "--save" => Ok(PlayerCommand::Act(PlayerAction::Save(arg))),
                "--load" => Ok(PlayerCommand::Act(PlayerAction::Load(arg))),
                "--help" => Ok(PlayerCommand::Act(PlayerAction::Help)),
                _ => Err(crate::Error::UnknownAction {
                    input: token.to_string(),
                }),
            };
        }

        Ok(PlayerCommand::Place(trimmed.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wild::board::Mark;

    #[test]
    fn test_parse_move_command() {
        let cmd: PlayerCommand = "0,2,x".parse().unwrap();
        assert_eq!(cmd, PlayerCommand::Place(Move::new(0, 2, Mark::X)));
    }

    #[test]
    fn test_parse_actions_case_insensitive() {
        assert_eq!(
            "--undo".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::Act(PlayerAction::Undo)
        );
        assert_eq!(
            "--REDO".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::Act(PlayerAction::Redo)
        );
        assert_eq!(
            "--Help".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::Act(PlayerAction::Help)
        );
    }

    #[test]
    fn test_parse_save_with_and_without_path() {
        assert_eq!(
            "--save".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::Act(PlayerAction::Save(None))
        );
        assert_eq!(
            "--save games/monday.json".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::Act(PlayerAction::Save(Some(PathBuf::from("games/monday.json"))))
        );
    }

    #[test]
    fn test_parse_load_keeps_path_argument() {
        assert_eq!(
            "  --load  old.json ".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::Act(PlayerAction::Load(Some(PathBuf::from("old.json"))))
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = "--quit".parse::<PlayerCommand>().unwrap_err();
        assert!(err.to_string().contains("unknown action"), "got {err}");
    }

    #[test]
    fn test_malformed_move_is_rejected() {
        assert!("nonsense".parse::<PlayerCommand>().is_err());
        assert!("1;2;X".parse::<PlayerCommand>().is_err());
    }
}
