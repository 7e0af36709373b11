use std::collections::VecDeque;

use crate::grid::{Grid, Point};
use Direction::*;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }
}

/// The snake's body, head first.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// A straight snake of `size` cells with its head at `head`, trailing
    /// away from `direction`.
    pub fn new(grid: &Grid, head: Point, size: usize, direction: Direction) -> Self {
        let behind = direction.opposite();
        let body = std::iter::successors(Some(head), |p| Some(grid.step(*p, behind)))
            .take(size)
            .collect();
        Snake { body }
    }

    #[cfg(test)]
    pub fn from_cells(cells: Vec<Point>) -> Self {
        Snake { body: cells.into() }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.body.contains(p)
    }

    /// Where the head would be after one step towards `direction`.
    /// Does not move the snake.
    pub fn advance(&self, grid: &Grid, direction: Direction) -> Point {
        grid.step(self.head(), direction)
    }

    /// Whether `new_head` runs into the body as it is before this step's
    /// update. The tail cell counts even though it may be vacated this step.
    pub fn self_collides(&self, new_head: Point) -> bool {
        self.body.contains(&new_head)
    }

    /// Pushes `new_head` and drops the tail unless the snake just ate.
    pub fn grow_or_slide(&mut self, new_head: Point, ate_food: bool) {
        self.body.push_front(new_head);

        if !ate_food {
            self.body.pop_back();
        }
    }
}
