//! Game participants: human and computer players

use rand::{SeedableRng, random, rngs::StdRng};

use super::{board::Board, command::PlayerCommand};

/// A participant in the game.
///
/// A closed two-variant set: a human whose commands arrive through the
/// console front end, or a computer that answers every request with a
/// uniformly random legal move. Two players persist for the game's lifetime;
/// the game tracks which one is current.
#[derive(Debug)]
pub enum Player {
    Human { name: String },
    Computer { name: String, rng: StdRng },
}

impl Player {
    /// Create a human player
    pub fn human(name: impl Into<String>) -> Self {
        Player::Human { name: name.into() }
    }

    /// Create a computer player.
    ///
    /// Pass a seed for reproducible play; without one the generator is
    /// seeded from ambient randomness.
    pub fn computer(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = StdRng::seed_from_u64(seed.unwrap_or_else(random));
        Player::Computer {
            name: name.into(),
            rng,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Player::Human { name } | Player::Computer { name, .. } => name,
        }
    }

    pub fn is_computer(&self) -> bool {
        matches!(self, Player::Computer { .. })
    }

    /// Produce a command without console input, if this player can.
    ///
    /// A computer always answers with a move command wrapping a random legal
    /// move and never issues undo/redo/save/load. A human returns `None`;
    /// gathering their input is the front end's job.
    ///
    /// # Errors
    ///
    /// A computer on a full board yields `Some(Err(NoVacantCell))`; the game
    /// loop never requests a move in that state.
    pub fn auto_command(&mut self, board: &Board) -> Option<crate::Result<PlayerCommand>> {
        match self {
            Player::Human { .. } => None,
            Player::Computer { rng, .. } => {
                Some(board.random_move(rng).map(PlayerCommand::Place))
            }
        }
    }
}
