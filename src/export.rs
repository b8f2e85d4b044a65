//! Export of save artifacts to analysis-friendly formats

use std::{fs::File, io::BufWriter, path::Path};

use serde::Serialize;

use crate::wild::save::SaveState;

#[derive(Serialize)]
struct MoveRecord {
    step: usize,
    row: usize,
    column: usize,
    value: char,
}

/// Write a save artifact's move list as CSV (`step,row,column,value`),
/// one record per move in application order.
///
/// # Errors
///
/// Returns an IO error naming the path if the file cannot be created, or a
/// CSV error from the writer.
pub fn moves_to_csv<P: AsRef<Path>>(state: &SaveState, path: P) -> crate::Result<()> {
    let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
        operation: format!("create CSV file '{}'", path.as_ref().display()),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    for (step, saved) in state.moves.iter().enumerate() {
        writer.serialize(MoveRecord {
            step,
            row: saved.row,
            column: saved.column,
            value: saved.value.to_char(),
        })?;
    }

    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("flush CSV file '{}'", path.as_ref().display()),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::wild::{Mark, SavedMove};

    #[test]
    fn test_csv_has_one_record_per_move() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("moves.csv");

        let state = SaveState {
            moves: vec![
                SavedMove {
                    row: 0,
                    column: 0,
                    value: Mark::X,
                },
                SavedMove {
                    row: 1,
                    column: 2,
                    value: Mark::O,
                },
            ],
            player1_name: "A".to_string(),
            player2_name: "B".to_string(),
            current_player_name: "A".to_string(),
        };

        moves_to_csv(&state, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "step,row,column,value");
        assert_eq!(lines[1], "0,0,0,X");
        assert_eq!(lines[2], "1,1,2,O");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_move_list_writes_nothing_but_succeeds() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("empty.csv");

        let state = SaveState {
            moves: Vec::new(),
            player1_name: "A".to_string(),
            player2_name: "B".to_string(),
            current_player_name: "A".to_string(),
        };

        moves_to_csv(&state, &path).unwrap();
        assert!(path.exists());
    }
}
