//! Error types for the wildtac crate

use thiserror::Error;

use crate::wild::board::Mark;

/// Main error type for the wildtac crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move ({row},{column}) is out of bounds (rows and columns are 0-2)")]
    OutOfBounds { row: usize, column: usize },

    #[error("cell ({row},{column}) is already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("cannot undo at ({row},{column}): the cell is empty")]
    UndoEmptyCell { row: usize, column: usize },

    #[error("no vacant cells available for a random move")]
    NoVacantCell,

    #[error("invalid move '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    ParseMark { input: String },

    #[error("unknown action '{input}'. Expected one of: --undo, --redo, --save, --load, --help")]
    UnknownAction { input: String },

    #[error("saved move at step {step} is not valid: ({row},{column}) placing {mark}")]
    InvalidSavedMove {
        step: usize,
        row: usize,
        column: usize,
        mark: Mark,
    },

    #[error("saved current player '{name}' matches neither '{player1}' nor '{player2}'")]
    UnknownSavedPlayer {
        name: String,
        player1: String,
        player2: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
