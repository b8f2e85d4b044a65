//! Wild Tic-Tac-Toe game implementation
//!
//! In the wild variant both players may place either mark on their turn; the
//! player completing any three-in-a-row wins, and a full grid is a draw.

pub mod board;
pub mod command;
pub mod game;
pub mod lines;
pub mod player;
pub mod save;

pub use board::{BOARD_SIZE, Board, Mark, Move};
pub use command::{DEFAULT_SAVE_PATH, PlayerAction, PlayerCommand};
pub use game::{Game, Outcome};
pub use player::Player;
pub use save::{SaveState, SavedMove};
