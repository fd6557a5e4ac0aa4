//! On-disc structure for suspending a game in progress and resuming it later.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use crate::util::DATA_DIR;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to write the save file: {0}")]
    FailedToCreateFile(String),

    #[error("Failed to create JSON: {0}")]
    JSONEncodeError(String),
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        SaveError::FailedToCreateFile(e.to_string())
    }
}

impl From<::serde_json::Error> for SaveError {
    fn from(e: ::serde_json::Error) -> Self {
        SaveError::JSONEncodeError(e.to_string())
    }
}

/// A suspended game: everything needed to come back to a session later,
/// including the whole undo history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    /// What the session is filed under, usually the level file stem.
    pub name: String,

    /// The level file the session was started from, if any.
    pub path: Option<PathBuf>,

    /// The level text the session was started from, when not from a file.
    pub source: Option<String>,

    /// Snapshots of every state reached so far, oldest first.
    pub history: Vec<String>,
}

impl SavedGame {
    fn file(name: &str) -> PathBuf {
        DATA_DIR.join(name).with_extension("json")
    }

    /// Try to read the saved session with the given name.
    pub fn read(name: &str) -> Option<SavedGame> {
        let file = File::open(Self::file(name)).ok()?;
        ::serde_json::from_reader(file).ok()
    }

    /// Write the session to disc, replacing any previous save of that name.
    pub fn write(&self) -> Result<(), SaveError> {
        fs::create_dir_all(&*DATA_DIR)?;
        let file = File::create(Self::file(&self.name))?;
        ::serde_json::to_writer(file, self).map_err(SaveError::from)
    }

    /// Remove the saved session with the given name, if there is one.
    pub fn remove(name: &str) {
        let _ = fs::remove_file(Self::file(name));
    }
}
