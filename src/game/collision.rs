use serde::Serialize;

use super::grid::{Cell, Grid};

/// What the head ran into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Classifies a move of the head onto `new_head`. `body` must already
/// exclude any cell vacated on this tick.
pub fn check(new_head: Cell, body: &[Cell], grid: Grid) -> Option<Collision> {
    if !grid.contains(new_head) {
        return Some(Collision::Wall);
    }
    if body.contains(&new_head) {
        return Some(Collision::SelfCollision);
    }
    None
}

pub fn is_legal(new_head: Cell, body_excluding_tail: &[Cell], grid: Grid) -> bool {
    check(new_head, body_excluding_tail, grid).is_none()
}
