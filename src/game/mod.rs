//! Game state core: pure data and a `tick` transition function.
//!
//! Nothing in here touches the window, the clock or a global RNG, so the
//! whole game can be driven from tests with a seeded random source.

pub mod collision;
pub mod direction;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

pub use collision::{Collision, is_legal};
pub use direction::Direction;
pub use food::spawn;
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GameState, Input, Outcome, Phase, SCORE_PER_FOOD, tick};
