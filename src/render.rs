use macroquad::prelude::*;

use crate::config::GameConfig;
use crate::game::{Cell, GameState, Outcome, Phase};

const BACKGROUND: Color = BLACK;
const SNAKE_HEAD: Color = Color::new(0.31, 0.9, 0.31, 1.0);
const SNAKE_BODY: Color = Color::new(0.0, 0.78, 0.0, 1.0);
const FOOD: Color = RED;
const GRID_LINES: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const TEXT: Color = WHITE;

const SCORE_FONT_SIZE: f32 = 24.0;

/// Draws a [`GameState`] in immediate mode. Holds only pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    cell: f32,
    width: f32,
    height: f32,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell: config.grid_size as f32,
            width: config.width as f32,
            height: config.height as f32,
        }
    }

    /// Pixel rectangle covering `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            cell.x as f32 * self.cell,
            cell.y as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }

    pub fn draw(&self, state: &GameState) {
        clear_background(BACKGROUND);
        self.draw_grid();
        self.draw_snake(state);
        if let Some(food) = state.food {
            self.fill(food, FOOD);
        }
        self.draw_score(state.score);
        if let Some(message) = overlay_message(state.phase) {
            self.draw_centered(message);
        }
    }

    fn draw_grid(&self) {
        let mut x = 0.0;
        while x < self.width {
            draw_line(x, 0.0, x, self.height, 1.0, GRID_LINES);
            x += self.cell;
        }
        let mut y = 0.0;
        while y < self.height {
            draw_line(0.0, y, self.width, y, 1.0, GRID_LINES);
            y += self.cell;
        }
    }

    fn draw_snake(&self, state: &GameState) {
        for (i, cell) in state.snake.body().iter().enumerate() {
            let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
            self.fill(*cell, color);
        }
    }

    fn fill(&self, cell: Cell, color: Color) {
        let r = self.cell_rect(cell);
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }

    fn draw_score(&self, score: u32) {
        // draw_text anchors at the baseline
        draw_text(
            &format!("Score: {score}"),
            10.0,
            10.0 + SCORE_FONT_SIZE,
            SCORE_FONT_SIZE,
            TEXT,
        );
    }

    fn draw_centered(&self, message: &str) {
        let m = measure_text(message, None, SCORE_FONT_SIZE as u16, 1.0);
        draw_text(
            message,
            (self.width - m.width) * 0.5,
            (self.height + m.height) * 0.5,
            SCORE_FONT_SIZE,
            TEXT,
        );
    }
}

/// Text shown over the board, if any.
pub fn overlay_message(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Running => None,
        Phase::GameOver(Outcome::Won) => Some("You Win! - Press Enter to play again"),
        Phase::GameOver(Outcome::Crashed(_)) => Some("Game Over - Press Enter to play again"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Collision;

    #[test]
    fn cells_map_to_pixels() {
        let renderer = Renderer::new(&GameConfig::default());
        assert_eq!(
            renderer.cell_rect(Cell::new(0, 0)),
            Rect::new(0.0, 0.0, 20.0, 20.0)
        );
        assert_eq!(
            renderer.cell_rect(Cell::new(29, 19)),
            Rect::new(580.0, 380.0, 20.0, 20.0)
        );
    }

    #[test]
    fn overlay_only_after_game_over() {
        assert_eq!(overlay_message(Phase::Running), None);
        assert_eq!(
            overlay_message(Phase::GameOver(Outcome::Crashed(Collision::SelfCollision))),
            Some("Game Over - Press Enter to play again")
        );
        assert!(
            overlay_message(Phase::GameOver(Outcome::Won))
                .unwrap()
                .starts_with("You Win!")
        );
    }
}
