//! Saved-game artifact and JSON file IO
//!
//! The save file is a flat, non-polymorphic record of a game: the move list
//! in application order, both player names, and the name of the player to
//! move next. There is no schema version field, so this one schema is the
//! only form written or accepted.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use super::board::{Mark, Move};

/// One recorded placement.
///
/// Kept separate from the in-memory [`Move`] so the artifact's field names
/// stay a stable external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavedMove {
    pub row: usize,
    pub column: usize,
    pub value: Mark,
}

impl From<Move> for SavedMove {
    fn from(mv: Move) -> Self {
        SavedMove {
            row: mv.row,
            column: mv.column,
            value: mv.mark,
        }
    }
}

impl From<SavedMove> for Move {
    fn from(saved: SavedMove) -> Self {
        Move::new(saved.row, saved.column, saved.value)
    }
}

/// The persisted form of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveState {
    /// Moves in application order (oldest first)
    pub moves: Vec<SavedMove>,
    pub player1_name: String,
    pub player2_name: String,
    /// Whose turn it is when the game resumes
    pub current_player_name: String,
}

impl SaveState {
    /// Write the artifact as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an IO error naming the path if the file cannot be created,
    /// or a serialization error.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create save file '{}'", path.as_ref().display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Read an artifact back from disk.
    ///
    /// # Errors
    ///
    /// Returns an IO error naming the path if the file cannot be opened, or
    /// a serialization error if the contents do not match the schema.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let file = File::open(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("open save file '{}'", path.as_ref().display()),
            source,
        })?;
        let state = serde_json::from_reader(BufReader::new(file))?;
        Ok(state)
    }
}
