use std::path::PathBuf;

use log::LevelFilter;

use crate::grid::Coord;
use crate::snake::INITIAL_SNAKE_LENGTH;

/// Rows above the board used for the score line and a spacer.
pub const HEADER_ROWS: u16 = 2;
/// Each grid cell is this many terminal columns wide.
pub const COLS_PER_CELL: u16 = 2;
/// The starting snake plus one free cell for the food.
const MIN_CELLS_X: Coord = INITIAL_SNAKE_LENGTH as Coord + 1;

/// Static settings for a run of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Field width in pixels-equivalent units
    pub width: Coord,
    /// Field height in pixels-equivalent units
    pub height: Coord,
    /// Size of a grid cell, all positions are multiples of it
    pub cell_size: Coord,
    /// Steps per second at the start of a game
    pub base_speed: u32,
    pub high_score_path: PathBuf,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 800,
            height: 600,
            cell_size: 20,
            base_speed: 8,
            high_score_path: PathBuf::from("high_score.txt"),
            log_path: PathBuf::from("snake.log"),
            log_level: LevelFilter::Debug,
        }
    }
}

impl GameConfig {
    /// Shrinks the field so the board, its border and the status header fit a
    /// terminal of `cols` x `rows`. Never grows the field, and never below
    /// one row wide enough for the starting snake and a free cell.
    pub fn fit_to_terminal(mut self, cols: u16, rows: u16) -> Self {
        let max_cells_x = (cols.saturating_sub(2) / COLS_PER_CELL) as Coord;
        let max_cells_y = rows.saturating_sub(2 + HEADER_ROWS) as Coord;

        let cells_x = (self.width / self.cell_size).min(max_cells_x).max(MIN_CELLS_X);
        let cells_y = (self.height / self.cell_size).min(max_cells_y).max(1);

        self.width = cells_x * self.cell_size;
        self.height = cells_y * self.cell_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food;
    use crate::grid::{Grid, Point};
    use crate::snake::{Direction, Snake};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height, config.cell_size), (800, 600, 20));
        assert_eq!(config.base_speed, 8);
        assert_eq!(config.high_score_path, PathBuf::from("high_score.txt"));
    }

    #[test]
    fn test_default_logs_debug() {
        assert_eq!(GameConfig::default().log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_tiny_terminal_still_fits_starting_snake() {
        let config = GameConfig::default().fit_to_terminal(6, 5);
        assert_eq!((config.width, config.height), (80, 20));

        let grid = Grid::new(config.width, config.height, config.cell_size);
        let snake = Snake::new(&grid, grid.center(), INITIAL_SNAKE_LENGTH, Direction::Right);
        let distinct: HashSet<Point> = snake.body().iter().copied().collect();
        assert_eq!(distinct.len(), INITIAL_SNAKE_LENGTH);

        let food = food::place(&mut StdRng::seed_from_u64(1), &grid, &snake);
        assert!(!snake.contains(&food));
    }

    #[test]
    fn test_large_terminal_keeps_field() {
        let config = GameConfig::default().fit_to_terminal(200, 60);
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn test_small_terminal_shrinks_field() {
        // 80 cols: 78 usable -> 39 cells; 24 rows: 20 usable -> 20 cells
        let config = GameConfig::default().fit_to_terminal(80, 24);
        assert_eq!((config.width, config.height), (780, 400));
    }
}
