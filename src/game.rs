use std::fs;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::direction::Direction;
use crate::level::Level;
use crate::save::SavedGame;
use crate::util::BoxworldError;

/// Where the level text came from. Restarting goes back to the source rather
/// than to the oldest history entry, so starting over behaves exactly like a
/// fresh start.
#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Text(String),
}

impl Source {
    fn read(&self) -> Result<String, BoxworldError> {
        match *self {
            Source::File(ref path) => Ok(fs::read_to_string(path)?),
            Source::Text(ref text) => Ok(text.clone()),
        }
    }
}

/// A game in progress: the level being played plus the history of every state
/// reached so far.
#[derive(Debug)]
pub struct Game {
    source: Source,

    /// Serialized snapshots, oldest first. The first entry is the state right
    /// after loading; it is never popped.
    history: Vec<String>,

    level: Level,
}

impl Game {
    /// Start a game from a level description.
    pub fn load(text: &str) -> Result<Game, BoxworldError> {
        Game::with_source(Source::Text(text.to_string()))
    }

    /// Start a game from a level file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Game, BoxworldError> {
        Game::with_source(Source::File(path.as_ref().to_path_buf()))
    }

    fn with_source(source: Source) -> Result<Game, BoxworldError> {
        let level = Level::parse(&source.read()?)?;
        let history = vec![level.to_string()];
        Ok(Game {
               source,
               history,
               level,
           })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn is_won(&self) -> bool {
        self.level.is_won()
    }

    /// How many moves it took to reach the current state.
    pub fn number_of_moves(&self) -> usize {
        self.history.len() - 1
    }

    /// Move the player, remembering the new state if the move changed
    /// anything. Return true if and only if the player moved.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let advanced = self.level.try_move(direction);
        if advanced {
            self.history.push(self.level.to_string());
        }
        advanced
    }

    /// Throw away the current state and go back to the one before it. At the
    /// initial state there is nothing to go back to and nothing happens.
    pub fn undo(&mut self) -> Result<(), BoxworldError> {
        if self.history.len() == 1 {
            warn!("Nothing to undo!");
            return Ok(());
        }
        self.history.pop();
        self.level = Level::parse(self.history.last().unwrap())?;
        Ok(())
    }

    /// Discard the whole history and play the level from the beginning. The
    /// level source is read again, exactly like a fresh start.
    pub fn restart(&mut self) -> Result<(), BoxworldError> {
        let level = Level::parse(&self.source.read()?)?;
        self.history.clear();
        self.history.push(level.to_string());
        self.level = level;
        Ok(())
    }

    /// Apply a single command from the front end.
    pub fn execute(&mut self, command: Command) -> Result<(), BoxworldError> {
        match command {
            Command::Nothing => Ok(()),
            Command::Move(direction) => {
                self.try_move(direction);
                Ok(())
            }
            Command::Undo => self.undo(),
            Command::Restart => self.restart(),
        }
    }

    /// Package the session up for suspension to disc.
    pub fn to_saved(&self, name: &str) -> SavedGame {
        let (path, source) = match self.source {
            Source::File(ref path) => (Some(path.clone()), None),
            Source::Text(ref text) => (None, Some(text.clone())),
        };
        SavedGame {
            name: name.to_string(),
            path,
            source,
            history: self.history.clone(),
        }
    }

    /// Resume a suspended session. The current state is parsed from the most
    /// recent snapshot, so a save that was tampered with fails here instead
    /// of producing an inconsistent game.
    pub fn from_saved(saved: SavedGame) -> Result<Game, BoxworldError> {
        let SavedGame {
            path,
            source,
            history,
            ..
        } = saved;

        let source = match (path, source) {
            (Some(path), _) => Source::File(path),
            (None, Some(text)) => Source::Text(text),
            (None, None) => return Err(BoxworldError::CorruptSave),
        };
        if history.is_empty() {
            return Err(BoxworldError::CorruptSave);
        }

        let level = Level::parse(&history[history.len() - 1])?;
        Ok(Game {
               source,
               history,
               level,
           })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::direction::Direction::*;

    #[test]
    fn test_push_record_and_undo() {
        let mut game = Game::load("421").unwrap();
        assert_eq!(game.number_of_moves(), 0);

        assert!(game.try_move(Right));
        assert_eq!(game.level().to_string(), "043");
        assert!(game.is_won());
        assert_eq!(game.number_of_moves(), 1);

        game.undo().unwrap();
        assert_eq!(game.level().to_string(), "421");
        assert!(!game.is_won());

        // Undoing past the initial state changes nothing.
        game.undo().unwrap();
        assert_eq!(game.level().to_string(), "421");
        assert_eq!(game.number_of_moves(), 0);
    }

    #[test]
    fn test_blocked_moves_are_not_recorded() {
        let mut game = Game::load("4220").unwrap();
        assert!(!game.try_move(Right));
        assert!(!game.try_move(Left));
        assert!(!game.try_move(Up));
        assert_eq!(game.number_of_moves(), 0);
        assert_eq!(game.level().to_string(), "4220");
    }

    #[test]
    fn test_restart_discards_the_history() {
        let mut game = Game::load("40201\n00000").unwrap();
        let initial = game.level().to_string();

        assert!(game.try_move(Down));
        assert!(game.try_move(Up));
        assert!(game.try_move(Right));
        assert!(game.try_move(Right));
        assert_eq!(game.number_of_moves(), 4);

        game.restart().unwrap();
        assert_eq!(game.level().to_string(), initial);
        assert_eq!(game.number_of_moves(), 0);

        // The history really is gone, not just hidden.
        game.undo().unwrap();
        assert_eq!(game.level().to_string(), initial);
    }

    #[test]
    fn test_execute_dispatches() {
        let mut game = Game::load("421").unwrap();
        game.execute(Command::Nothing).unwrap();
        assert_eq!(game.number_of_moves(), 0);

        game.execute(Command::Move(Right)).unwrap();
        assert!(game.is_won());

        game.execute(Command::Undo).unwrap();
        assert_eq!(game.level().to_string(), "421");

        game.execute(Command::Move(Right)).unwrap();
        game.execute(Command::Restart).unwrap();
        assert_eq!(game.level().to_string(), "421");
        assert_eq!(game.number_of_moves(), 0);
    }

    #[test]
    fn test_saved_round_trip() {
        let mut game = Game::load("4200").unwrap();
        assert!(game.try_move(Right));
        assert!(game.try_move(Right));

        let mut resumed = Game::from_saved(game.to_saved("test")).unwrap();
        assert_eq!(resumed.level().to_string(), game.level().to_string());
        assert_eq!(resumed.number_of_moves(), 2);

        // The undo history came along
        resumed.undo().unwrap();
        assert_eq!(resumed.level().to_string(), "0420");
    }

    #[test]
    fn test_resuming_a_corrupt_save_fails() {
        let saved = SavedGame {
            name: "broken".to_string(),
            path: None,
            source: Some("421".to_string()),
            history: vec![],
        };
        assert!(matches!(Game::from_saved(saved), Err(BoxworldError::CorruptSave)));

        let saved = SavedGame {
            name: "broken".to_string(),
            path: None,
            source: Some("421".to_string()),
            history: vec!["4X1".to_string()],
        };
        assert!(matches!(Game::from_saved(saved),
                         Err(BoxworldError::InvalidSymbol { .. })));
    }
}
