use rand::Rng;

use crate::grid::{Grid, Point};
use crate::snake::Snake;

/// Picks a random cell that the snake does not occupy.
///
/// Draws until a free cell comes up. If the snake covers the whole grid this
/// never returns.
pub fn place<R: Rng>(rng: &mut R, grid: &Grid, excluding: &Snake) -> Point {
    loop {
        let x = rng.gen_range(0..grid.cols()) * grid.cell();
        let y = rng.gen_range(0..grid.rows()) * grid.cell();
        let candidate = Point::new(x, y);

        if !excluding.contains(&candidate) {
            return candidate;
        }
    }
}
