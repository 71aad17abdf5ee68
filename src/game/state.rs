use log::{Level, debug, info, log_enabled, trace, warn};
use rand::Rng;
use serde::Serialize;

use super::collision::{self, Collision};
use super::direction::Direction;
use super::food;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::error::SpawnError;

pub const SCORE_PER_FOOD: u32 = 10;

/// How a game ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Crashed(Collision),
    /// The snake fills the whole board.
    Won,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Phase {
    Running,
    GameOver(Outcome),
}

/// The single input consumed by one tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    None,
    Turn(Direction),
    Restart,
}

/// Everything the renderer needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    /// `None` only once the board is full.
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    /// Fresh game: one cell at the grid center heading right, food anywhere else.
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let snake = Snake::new(grid.center(), Direction::Right);
        match food::spawn(snake.body(), grid, rng) {
            Ok(cell) => Self::with_snake(grid, snake, cell),
            Err(SpawnError::GridFull) => Self {
                grid,
                snake,
                food: None,
                score: 0,
                phase: Phase::GameOver(Outcome::Won),
            },
        }
    }

    /// A running game with a given snake and food, score 0.
    pub fn with_snake(grid: Grid, snake: Snake, food: Cell) -> Self {
        Self {
            grid,
            snake,
            food: Some(food),
            score: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Logs the state as JSON at debug level. Nothing is serialized while
    /// debug logging is off; returns whether a snapshot was written.
    pub fn log_snapshot(&self, label: &str) -> bool {
        if !log_enabled!(Level::Debug) {
            return false;
        }
        match serde_json::to_string(self) {
            Ok(json) => {
                debug!("{label}: {json}");
                true
            }
            Err(err) => {
                warn!("could not serialize {label}: {err}");
                false
            }
        }
    }
}

/// Advances the game by one step.
///
/// While running, a `Turn` is applied unless it reverses the heading, the head
/// moves one cell and the move is checked against walls and the body. The
/// current tail does not count as body unless the snake is growing this tick,
/// since that cell is vacated by the same move. Once the game is over only
/// `Restart` has an effect.
pub fn tick<R: Rng + ?Sized>(mut state: GameState, input: Input, rng: &mut R) -> GameState {
    if state.is_game_over() {
        if input == Input::Restart {
            info!("restarting after score {}", state.score);
            return GameState::new(state.grid, rng);
        }
        return state;
    }

    if let Input::Turn(heading) = input {
        if !state.snake.turn(heading) {
            trace!("ignoring reversal from {:?} to {:?}", state.snake.heading(), heading);
        }
    }

    let new_head = state.snake.next_head();
    let ate_food = state.food == Some(new_head);
    let body = if ate_food {
        state.snake.body()
    } else {
        state.snake.body_excluding_tail()
    };

    if let Some(hit) = collision::check(new_head, body, state.grid) {
        info!(
            "game over: {:?} at ({}, {}), score {}, length {}",
            hit,
            new_head.x,
            new_head.y,
            state.score,
            state.snake.len()
        );
        state.phase = Phase::GameOver(Outcome::Crashed(hit));
        return state;
    }

    let heading = state.snake.heading();
    let (_, grew) = state.snake.advance(heading, state.food);
    if !grew {
        return state;
    }

    state.score += SCORE_PER_FOOD;
    debug!("ate food at ({}, {}), score {}", new_head.x, new_head.y, state.score);
    match food::spawn(state.snake.body(), state.grid, rng) {
        Ok(cell) => state.food = Some(cell),
        Err(SpawnError::GridFull) => {
            info!("board full, score {}", state.score);
            state.food = None;
            state.phase = Phase::GameOver(Outcome::Won);
        }
    }
    state
}
