use serde::Serialize;

use super::direction::Direction;

/// One discrete board position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Playfield bounds: cells in `[0, width) x [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Cell::new(x, y)))
    }
}
