use crate::snake::Direction::{self, *};

pub type Coord = i32;

/// A grid position. Both coordinates are multiples of the cell size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }
}

/// The playfield. Edges wrap around, so there are no walls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: Coord,
    height: Coord,
    cell: Coord,
}

impl Grid {
    /// Dimensions are truncated to a multiple of `cell`.
    pub fn new(width: Coord, height: Coord, cell: Coord) -> Self {
        assert!(cell > 0, "cell size must be positive");
        Grid {
            width: width / cell * cell,
            height: height / cell * cell,
            cell,
        }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn cell(&self) -> Coord {
        self.cell
    }

    pub fn cols(&self) -> Coord {
        self.width / self.cell
    }

    pub fn rows(&self) -> Coord {
        self.height / self.cell
    }

    /// The cell closest to the middle of the field.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2 / self.cell * self.cell, self.height / 2 / self.cell * self.cell)
    }

    /// Moves `p` one cell towards `dir`, re-entering from the opposite edge.
    pub fn step(&self, p: Point, dir: Direction) -> Point {
        match dir {
            Up => Point::new(p.x, (p.y - self.cell).rem_euclid(self.height)),
            Down => Point::new(p.x, (p.y + self.cell).rem_euclid(self.height)),
            Left => Point::new((p.x - self.cell).rem_euclid(self.width), p.y),
            Right => Point::new((p.x + self.cell).rem_euclid(self.width), p.y),
        }
    }

    /// Column/row index of a point, for adapters that draw in cells.
    pub fn cell_of(&self, p: Point) -> (Coord, Coord) {
        (p.x / self.cell, p.y / self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_truncate_to_cell() {
        let grid = Grid::new(805, 619, 20);
        assert_eq!((grid.width(), grid.height()), (800, 600));
        assert_eq!((grid.cols(), grid.rows()), (40, 30));
    }

    #[test]
    fn test_aligned_dimensions_unchanged() {
        let grid = Grid::new(800, 600, 20);
        assert_eq!((grid.width(), grid.height()), (800, 600));
        assert_eq!(grid.center(), Point::new(400, 300));
    }

    #[test]
    fn test_center_is_cell_aligned() {
        let grid = Grid::new(220, 140, 20);
        assert_eq!(grid.center(), Point::new(100, 60));
    }

    #[test]
    fn test_step_and_back_is_identity() {
        let grid = Grid::new(800, 600, 20);
        let points = [
            Point::new(0, 0),
            Point::new(780, 580),
            Point::new(400, 300),
            Point::new(0, 580),
        ];
        for p in points {
            for dir in [Up, Down, Left, Right] {
                assert_eq!(grid.step(grid.step(p, dir), dir.opposite()), p);
            }
        }
    }

    #[test]
    fn test_wraps_left_edge() {
        let grid = Grid::new(800, 600, 20);
        assert_eq!(grid.step(Point::new(0, 300), Left), Point::new(780, 300));
    }

    #[test]
    fn test_wraps_all_edges() {
        let grid = Grid::new(800, 600, 20);
        assert_eq!(grid.step(Point::new(780, 300), Right), Point::new(0, 300));
        assert_eq!(grid.step(Point::new(100, 0), Up), Point::new(100, 580));
        assert_eq!(grid.step(Point::new(100, 580), Down), Point::new(100, 0));
    }
}
