//! CLI command implementations

pub mod export;
pub mod play;
pub mod replay;
pub mod simulate;
