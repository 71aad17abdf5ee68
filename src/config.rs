use macroquad::window::Conf;
use serde::Serialize;

use crate::error::ConfigError;
use crate::game::Grid;

/// Window and pacing settings. Everything else about the board is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Side of one cell in pixels
    pub grid_size: u32,
    /// Ticks per second
    pub snake_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            grid_size: 20,
            snake_speed: 10,
        }
    }
}

impl GameConfig {
    /// Whole cells across the window.
    pub fn grid_width(&self) -> u32 {
        self.width / self.grid_size.max(1)
    }

    pub fn grid_height(&self) -> u32 {
        self.height / self.grid_size.max(1)
    }

    /// Seconds between two ticks.
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.snake_speed.max(1) as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid().map(|_| ())
    }

    /// The playfield in cells, or why this config can't produce one.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.snake_speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if self.width < self.grid_size || self.height < self.grid_size {
            return Err(ConfigError::WindowTooSmall {
                width: self.width,
                height: self.height,
                grid_size: self.grid_size,
            });
        }
        let (grid_width, grid_height) = (self.grid_width(), self.grid_height());
        // a lone snake cell plus one food cell
        if u64::from(grid_width) * u64::from(grid_height) < 2 {
            return Err(ConfigError::GridTooSmall {
                grid_width,
                grid_height,
            });
        }
        let (Ok(width), Ok(height)) = (i32::try_from(grid_width), i32::try_from(grid_height))
        else {
            return Err(ConfigError::GridTooLarge {
                grid_width,
                grid_height,
            });
        };
        Ok(Grid::new(width, height))
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "Snake".to_owned(),
            window_width: i32::try_from(self.width).unwrap_or(i32::MAX),
            window_height: i32::try_from(self.height).unwrap_or(i32::MAX),
            window_resizable: false,
            ..Default::default()
        }
    }
}
