use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::{GameError, GameResult};

/// The best score across runs, kept as a plain integer in a text file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    /// Reads the stored score. Anything unreadable counts as 0.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(s) => match s.trim().parse() {
                Ok(score) => {
                    info!("Loaded high score {} from {}", score, self.path.display());
                    score
                }
                Err(e) => {
                    warn!("Ignoring corrupt high score file {}: {}", self.path.display(), e);
                    0
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No high score file at {}", self.path.display());
                0
            }
            Err(e) => {
                warn!("Error loading high score: {}", e);
                0
            }
        }
    }

    pub fn save(&self, score: u32) -> GameResult<()> {
        fs::write(&self.path, score.to_string()).map_err(|source| GameError::HighScoreSave {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved high score {}", score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("high_score.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);

        fs::write(&path, "-3").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("high_score.txt"));
        store.save(17).unwrap();
        assert_eq!(store.load(), 17);
        store.save(23).unwrap();
        assert_eq!(store.load(), 23);
    }

    #[test]
    fn test_trailing_newline_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "12\n").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 12);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("nope").join("high_score.txt"));
        assert!(matches!(store.save(5), Err(GameError::HighScoreSave { .. })));
    }
}
