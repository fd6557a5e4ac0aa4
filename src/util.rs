use std::io;
use std::path::PathBuf;

/// Anything that can go wrong while loading, re-loading or resuming a level.
#[derive(Debug, thiserror::Error)]
pub enum BoxworldError {
    /// The level source could not be read at all.
    #[error("{0}")]
    IoError(#[from] io::Error),

    #[error("Invalid symbol '{symbol}' in line {line}, column {column}.")]
    InvalidSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    #[error("Line {line} is {found} cells wide, expected {expected}.")]
    RaggedLines {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("The level does not contain any cells.")]
    EmptyLevel,

    #[error("No player cell found.")]
    NoPlayer,

    #[error("More than one player cell found.")]
    TwoPlayers,

    #[error("The saved session is incomplete.")]
    CorruptSave,
}

lazy_static! {
    /// Where suspended sessions are stored.
    pub static ref DATA_DIR: PathBuf = ::directories::ProjectDirs::from("", "", "boxworld")
        .expect("no home directory found")
        .data_dir()
        .to_path_buf();
}
