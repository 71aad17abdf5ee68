use thiserror::Error;

/// Rejected [`GameConfig`](crate::GameConfig) values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be greater than zero")]
    ZeroGridSize,
    #[error("snake speed must be greater than zero ticks per second")]
    ZeroSpeed,
    #[error("window {width}x{height} does not fit a single {grid_size}px cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        grid_size: u32,
    },
    #[error("a {grid_width}x{grid_height} grid leaves no room for food")]
    GridTooSmall { grid_width: u32, grid_height: u32 },
    #[error("a {grid_width}x{grid_height} grid does not fit signed cell coordinates")]
    GridTooLarge { grid_width: u32, grid_height: u32 },
}

/// Failure to place food on the board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free cells left to spawn food")]
    GridFull,
}
