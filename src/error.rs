use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not save high score to {}", path.display())]
    HighScoreSave {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error")]
    Terminal(#[from] io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
