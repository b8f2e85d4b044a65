//! Wild Tic-Tac-Toe
//!
//! This crate provides:
//! - The complete wild-variant game core: board, moves, and terminal
//!   detection (either mark placeable on any turn)
//! - A turn-taking game engine with undo/redo history
//! - JSON save/load of game history and CSV export of move lists
//! - A console front end with human and random-computer players

pub mod cli;
pub mod error;
pub mod export;
pub mod wild;

pub use error::{Error, Result};
pub use wild::{Board, Game, Mark, Move, Outcome, Player, PlayerAction, PlayerCommand};
