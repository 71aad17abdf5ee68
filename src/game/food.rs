use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{Cell, Grid};
use crate::error::SpawnError;

/// Picks a cell outside `occupied`, uniformly at random.
pub fn spawn<R: Rng + ?Sized>(
    occupied: &[Cell],
    grid: Grid,
    rng: &mut R,
) -> Result<Cell, SpawnError> {
    let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
    free.choose(rng).copied().ok_or(SpawnError::GridFull)
}
