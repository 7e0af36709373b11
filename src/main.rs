mod config;
mod error;
mod food;
mod game;
mod grid;
mod input;
mod score;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info};
use simplelog::WriteLogger;

use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::score::HighScoreStore;
use crate::term::{TermBell, TermManager};

fn main() -> Result<()> {
    let config = GameConfig::default();

    // stdout belongs to the game screen, so logs go to a file
    let log_file = File::create(&config.log_path)
        .with_context(|| format!("Failed to create log file {}", config.log_path.display()))?;
    WriteLogger::init(config.log_level, simplelog::Config::default(), log_file)
        .context("Failed to initialize logger")?;

    info!("Starting snake");

    let (cols, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
    let config = config.fit_to_terminal(cols, rows);
    let store = HighScoreStore::new(&config.high_score_path);
    let mut game = SnakeGame::new(&config, store, TermBell::new());
    let grid = game.grid();
    info!("Field is {}x{} with cell size {}", grid.width(), grid.height(), grid.cell());

    let mut term = TermManager::new(*grid).context("Failed to open terminal")?;
    term.setup().context("Failed to set up terminal")?;

    let result = game::run(&mut game, &mut term);

    // Always give the terminal back, even if the game failed
    if let Err(err) = term.restore() {
        error!("Failed to restore terminal: {}", err);
    }

    if let Err(err) = &result {
        error!("Game stopped: {}", err);
    }

    result.context("Game stopped")
}
