//! Board state representation and move operations

use std::{fmt, str::FromStr};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::lines;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;

/// A mark placeable in a cell.
///
/// In Wild Tic-Tac-Toe either player may place either mark on their turn,
/// so a mark identifies a symbol, not a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }

    /// The other mark
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(crate::Error::ParseMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A single placement: which cell receives which mark.
///
/// Immutable once constructed. Moves are owned by whichever history stack
/// currently holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(row: usize, column: usize, mark: Mark) -> Self {
        Move { row, column, mark }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) placing '{}'", self.row, self.column, self.mark)
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Parse a move from `row,column,mark` text (e.g. `1,2,X`).
    ///
    /// Whitespace around each part is ignored and the mark is matched
    /// case-insensitively. Coordinates are not bounds-checked here; the
    /// board rejects out-of-range moves during validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| crate::Error::ParseMove {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if s.trim().is_empty() {
            return Err(parse_err("input is empty"));
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(parse_err("expected format: row,column,mark (e.g. 1,2,X)"));
        }

        let row = parts[0]
            .trim()
            .parse::<usize>()
            .map_err(|_| parse_err("row must be a non-negative integer"))?;
        let column = parts[1]
            .trim()
            .parse::<usize>()
            .map_err(|_| parse_err("column must be a non-negative integer"))?;
        let mark = Mark::from_str(parts[2]).map_err(|_| parse_err("mark must be 'X' or 'O'"))?;

        Ok(Move { row, column, mark })
    }
}

/// 3x3 Wild Tic-Tac-Toe board.
///
/// Cells are stored row-major. The board holds no notion of whose turn it
/// is. Turn ownership belongs to the game, not the grid.
///
/// # Examples
///
/// ```
/// use wildtac::wild::board::{Board, Mark, Move};
///
/// let mut board = Board::new();
/// board.apply_move(Move::new(1, 1, Mark::X))?;
/// assert!(!board.is_game_over());
/// assert_eq!(board.cell(1, 1), Some(Mark::X));
/// # Ok::<(), wildtac::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board { cells: [None; 9] }
    }

    fn index(row: usize, column: usize) -> usize {
        row * BOARD_SIZE + column
    }

    /// Check whether coordinates fall on the board
    pub fn in_bounds(row: usize, column: usize) -> bool {
        row < BOARD_SIZE && column < BOARD_SIZE
    }

    /// Get the mark at (row, column), if any.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<Mark> {
        assert!(Self::in_bounds(row, column), "cell access out of bounds");
        self.cells[Self::index(row, column)]
    }

    /// Check if a cell is vacant
    pub fn is_vacant(&self, row: usize, column: usize) -> bool {
        Self::in_bounds(row, column) && self.cells[Self::index(row, column)].is_none()
    }

    /// Check whether a move targets a vacant in-bounds cell.
    ///
    /// Turn ownership is deliberately not checked here.
    pub fn is_move_valid(&self, mv: Move) -> bool {
        self.is_vacant(mv.row, mv.column)
    }

    /// Place a move's mark on the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] or [`Error::CellOccupied`] without
    /// mutating the grid if the move is invalid.
    ///
    /// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
    /// [`Error::CellOccupied`]: crate::Error::CellOccupied
    pub fn apply_move(&mut self, mv: Move) -> crate::Result<()> {
        if !Self::in_bounds(mv.row, mv.column) {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                column: mv.column,
            });
        }
        if self.cells[Self::index(mv.row, mv.column)].is_some() {
            return Err(crate::Error::CellOccupied {
                row: mv.row,
                column: mv.column,
            });
        }

        self.cells[Self::index(mv.row, mv.column)] = Some(mv.mark);
        Ok(())
    }

    /// Clear the cell a previously applied move occupies.
    ///
    /// The caller must pass the exact move that was applied; once the cell is
    /// occupied the clear is unconditional (the occupant is not compared
    /// against the move's own mark).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] or [`Error::UndoEmptyCell`] if the move
    /// does not name an occupied in-bounds cell. Both indicate a caller bug
    /// rather than a recoverable game event.
    ///
    /// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
    /// [`Error::UndoEmptyCell`]: crate::Error::UndoEmptyCell
    pub fn undo_move(&mut self, mv: Move) -> crate::Result<()> {
        if !Self::in_bounds(mv.row, mv.column) {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                column: mv.column,
            });
        }
        if self.cells[Self::index(mv.row, mv.column)].is_none() {
            return Err(crate::Error::UndoEmptyCell {
                row: mv.row,
                column: mv.column,
            });
        }

        self.cells[Self::index(mv.row, mv.column)] = None;
        Ok(())
    }

    /// Get all vacant (row, column) coordinates in row-major order
    pub fn vacant_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / BOARD_SIZE, i % BOARD_SIZE))
            .collect()
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Pick a uniformly random legal move: a uniformly chosen vacant cell
    /// receiving a uniformly chosen mark.
    ///
    /// The generator is injected so callers control determinism: a seeded
    /// [`StdRng`](rand::rngs::StdRng) reproduces the same move sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoVacantCell`] when the board is full.
    ///
    /// [`Error::NoVacantCell`]: crate::Error::NoVacantCell
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> crate::Result<Move> {
        let vacant = self.vacant_cells();
        let &(row, column) = vacant.choose(rng).ok_or(crate::Error::NoVacantCell)?;
        let mark = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
        Ok(Move::new(row, column, mark))
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Check whether the given mark completes any line
    pub fn has_three_in_row(&self, mark: Mark) -> bool {
        lines::has_three_in_row(&self.cells, mark)
    }

    /// The mark completing a line, if any.
    ///
    /// In the wild variant a completed line of either mark ends the game in
    /// favor of whoever placed the final mark, so this names a mark rather
    /// than a player.
    pub fn winning_mark(&self) -> Option<Mark> {
        lines::winning_mark(&self.cells)
    }

    /// Check if the game has ended: a completed line of either mark, or a
    /// full grid (a draw).
    pub fn is_game_over(&self) -> bool {
        self.winning_mark().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Bordered grid, rows top-to-bottom, columns left-to-right, blank for
    /// an empty cell:
    ///
    /// ```text
    /// -------------
    /// | X |   | O |
    /// -------------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------")?;
        for row in 0..BOARD_SIZE {
            write!(f, "|")?;
            for column in 0..BOARD_SIZE {
                match self.cell(row, column) {
                    Some(mark) => write!(f, " {mark} |")?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            if row < BOARD_SIZE - 1 {
                writeln!(f, "-------------")?;
            } else {
                write!(f, "-------------")?;
            }
        }
        Ok(())
    }
}
