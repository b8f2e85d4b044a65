//! Turn-taking state machine with undo/redo history

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Mark, Move},
    command::PlayerCommand,
    player::Player,
    save::{SaveState, SavedMove},
};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A line of three equal marks was completed
    ThreeInRow(Mark),
    /// The grid filled with no completed line
    Draw,
}

/// A game in progress: the board, both players, and the undo/redo history.
///
/// The game owns turn order. Valid moves apply to the board, push onto the
/// undo history, and invalidate the redo branch; undo/redo walk the two
/// stacks and hand the turn back accordingly. The undo history replayed from
/// an empty board always reconstructs the current grid exactly.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    undo_stack: Vec<Move>,
    redo_stack: Vec<Move>,
}

impl Game {
    /// Start a fresh game; `player1` moves first
    pub fn new(player1: Player, player2: Player) -> Self {
        Game {
            board: Board::new(),
            players: [player1, player2],
            current: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Applied moves in chronological order
    pub fn history(&self) -> &[Move] {
        &self.undo_stack
    }

    /// Number of undone moves available for redo
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Ask the current player for a command it can produce unattended.
    ///
    /// `None` means the current player is human and the front end must
    /// gather input; a computer answers with a random legal move.
    pub fn auto_command(&mut self) -> Option<crate::Result<PlayerCommand>> {
        let Game {
            board,
            players,
            current,
            ..
        } = self;
        players[*current].auto_command(board)
    }

    /// Board mutation shared by live play and save-file replay: apply,
    /// push onto the undo history, invalidate the redo branch.
    fn apply_and_record(&mut self, mv: Move) -> crate::Result<()> {
        self.board.apply_move(mv)?;
        self.undo_stack.push(mv);
        self.redo_stack.clear();
        Ok(())
    }

    /// Play a move for the current player and pass the turn.
    ///
    /// # Errors
    ///
    /// Returns the board's rejection ([`OutOfBounds`] / [`CellOccupied`])
    /// with no state change; the same player keeps the turn and may try
    /// again.
    ///
    /// [`OutOfBounds`]: crate::Error::OutOfBounds
    /// [`CellOccupied`]: crate::Error::CellOccupied
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        self.apply_and_record(mv)?;
        self.swap_current();
        Ok(())
    }

    /// Take back the most recent move, if any.
    ///
    /// The move goes onto the redo history and the turn returns to whoever
    /// made it. `Ok(None)` means there was nothing to undo and nothing
    /// changed.
    ///
    /// # Errors
    ///
    /// Fails only on a board/history inconsistency (undoing a cell that is
    /// already empty), which is a caller bug surfaced loudly rather than repaired.
    pub fn undo(&mut self) -> crate::Result<Option<Move>> {
        let Some(mv) = self.undo_stack.pop() else {
            return Ok(None);
        };
        self.board.undo_move(mv)?;
        self.redo_stack.push(mv);
        self.swap_current();
        Ok(Some(mv))
    }

    /// Re-apply the most recently undone move, if any.
    ///
    /// `Ok(None)` means the redo history was empty and nothing changed.
    ///
    /// # Errors
    ///
    /// Fails only on a board/history inconsistency (the recorded move no
    /// longer applies), which is a caller bug surfaced loudly.
    pub fn redo(&mut self) -> crate::Result<Option<Move>> {
        let Some(mv) = self.redo_stack.pop() else {
            return Ok(None);
        };
        self.board.apply_move(mv)?;
        self.undo_stack.push(mv);
        self.swap_current();
        Ok(Some(mv))
    }

    /// Check whether the board reports a terminal state
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// How the game ended, once it has
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.board.winning_mark() {
            Some(Outcome::ThreeInRow(mark))
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn swap_current(&mut self) {
        self.current = 1 - self.current;
    }

    fn player_index_by_name(&self, name: &str) -> crate::Result<usize> {
        self.players
            .iter()
            .position(|player| player.name() == name)
            .ok_or_else(|| crate::Error::UnknownSavedPlayer {
                name: name.to_string(),
                player1: self.players[0].name().to_string(),
                player2: self.players[1].name().to_string(),
            })
    }

    /// Persist the game: the move history in chronological order, both
    /// player names, and whose turn is next. In-memory state is untouched.
    ///
    /// # Errors
    ///
    /// Propagates file-creation and serialization errors.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let state = SaveState {
            moves: self.undo_stack.iter().copied().map(SavedMove::from).collect(),
            player1_name: self.players[0].name().to_string(),
            player2_name: self.players[1].name().to_string(),
            current_player_name: self.current_player().name().to_string(),
        };
        state.save_to_file(path)
    }

    /// Replace the game in progress with a previously saved one.
    ///
    /// The whole move list is validated on a scratch board before any live
    /// state changes, so a corrupt artifact can never leave the board
    /// partially replayed. On success the undo history equals the saved move
    /// list, the redo history is empty, and the current player is restored
    /// by name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSavedMove`] for a move list that does not replay
    /// from an empty board, [`UnknownSavedPlayer`] when the saved
    /// current-player name matches neither participant, and IO or
    /// serialization errors from reading the artifact. The live game is
    /// unchanged in every error case.
    ///
    /// [`InvalidSavedMove`]: crate::Error::InvalidSavedMove
    /// [`UnknownSavedPlayer`]: crate::Error::UnknownSavedPlayer
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> crate::Result<()> {
        let state = SaveState::load_from_file(path)?;

        let current = self.player_index_by_name(&state.current_player_name)?;

        let mut scratch = Board::new();
        for (step, saved) in state.moves.iter().enumerate() {
            let mv = Move::from(*saved);
            scratch
                .apply_move(mv)
                .map_err(|_| crate::Error::InvalidSavedMove {
                    step,
                    row: mv.row,
                    column: mv.column,
                    mark: mv.mark,
                })?;
        }

        // Rewind by undoing every recorded move, then replay the artifact
        // through the same path as live moves.
        while let Some(mv) = self.undo_stack.pop() {
            self.board.undo_move(mv)?;
        }
        self.redo_stack.clear();

        for saved in state.moves {
            self.apply_and_record(Move::from(saved))?;
        }
        self.current = current;
        Ok(())
    }
}
