//! Grid Snake: the classic arcade game on a fixed grid.
//!
//! The `game` module is a pure state machine (no window, no clock) driven by
//! [`game::tick`]. The remaining modules glue it to macroquad.

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;

pub use config::GameConfig;
pub use error::{ConfigError, SpawnError};
