//! Export command - Convert a save artifact's move list to CSV

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{export, wild::SaveState};

#[derive(Parser, Debug)]
#[command(about = "Export a saved game's move list to CSV")]
pub struct ExportArgs {
    /// Path to the save file
    pub input: PathBuf,

    /// Destination CSV file
    pub output: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let state = SaveState::load_from_file(&args.input)?;
    export::moves_to_csv(&state, &args.output)?;

    println!(
        "Exported {} moves to: {}",
        state.moves.len(),
        args.output.display()
    );
    Ok(())
}
