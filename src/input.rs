use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::{Direction, Input, Phase};

/// Keys polled every frame, in priority order.
const BINDINGS: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
    KeyCode::Enter,
    KeyCode::KpEnter,
];

/// A logical key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Signal {
    Turn(Direction),
    Restart,
}

pub fn key_to_signal(key: KeyCode) -> Option<Signal> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Signal::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Signal::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Signal::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Signal::Turn(Direction::Right)),
        KeyCode::Enter | KeyCode::KpEnter => Some(Signal::Restart),
        _ => None,
    }
}

/// Key presses collected between two ticks. The latest heading wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingInput {
    heading: Option<Direction>,
    restart: bool,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, signal: Signal) {
        match signal {
            Signal::Turn(direction) => self.heading = Some(direction),
            Signal::Restart => self.restart = true,
        }
    }

    /// Records whatever bound keys macroquad saw go down this frame.
    pub fn poll_keyboard(&mut self) {
        for key in BINDINGS {
            if is_key_pressed(key) {
                if let Some(signal) = key_to_signal(key) {
                    self.record(signal);
                }
            }
        }
    }

    /// The one input for the next tick in `phase`. Clears everything pending.
    pub fn take(&mut self, phase: Phase) -> Input {
        let pending = std::mem::take(self);
        match phase {
            Phase::Running => pending.heading.map_or(Input::None, Input::Turn),
            Phase::GameOver(_) if pending.restart => Input::Restart,
            Phase::GameOver(_) => Input::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Collision, Outcome};

    const OVER: Phase = Phase::GameOver(Outcome::Crashed(Collision::Wall));

    #[test]
    fn arrows_and_wasd_share_directions() {
        assert_eq!(key_to_signal(KeyCode::Up), Some(Signal::Turn(Direction::Up)));
        assert_eq!(key_to_signal(KeyCode::W), Some(Signal::Turn(Direction::Up)));
        assert_eq!(key_to_signal(KeyCode::Down), Some(Signal::Turn(Direction::Down)));
        assert_eq!(key_to_signal(KeyCode::S), Some(Signal::Turn(Direction::Down)));
        assert_eq!(key_to_signal(KeyCode::Left), Some(Signal::Turn(Direction::Left)));
        assert_eq!(key_to_signal(KeyCode::A), Some(Signal::Turn(Direction::Left)));
        assert_eq!(key_to_signal(KeyCode::Right), Some(Signal::Turn(Direction::Right)));
        assert_eq!(key_to_signal(KeyCode::D), Some(Signal::Turn(Direction::Right)));
    }

    #[test]
    fn enter_restarts() {
        assert_eq!(key_to_signal(KeyCode::Enter), Some(Signal::Restart));
        assert_eq!(key_to_signal(KeyCode::KpEnter), Some(Signal::Restart));
        assert_eq!(key_to_signal(KeyCode::X), None);
        assert_eq!(key_to_signal(KeyCode::Space), None);
    }

    #[test]
    fn every_binding_maps_to_a_signal() {
        for key in BINDINGS {
            assert!(key_to_signal(key).is_some(), "{key:?}");
        }
    }

    #[test]
    fn last_turn_wins() {
        let mut pending = PendingInput::new();
        pending.record(Signal::Turn(Direction::Up));
        pending.record(Signal::Turn(Direction::Left));

        assert_eq!(pending.take(Phase::Running), Input::Turn(Direction::Left));
        assert_eq!(pending.take(Phase::Running), Input::None);
    }

    #[test]
    fn restart_only_counts_after_game_over() {
        let mut pending = PendingInput::new();
        pending.record(Signal::Restart);
        assert_eq!(pending.take(Phase::Running), Input::None);

        pending.record(Signal::Turn(Direction::Down));
        assert_eq!(pending.take(OVER), Input::None);

        pending.record(Signal::Turn(Direction::Down));
        pending.record(Signal::Restart);
        assert_eq!(pending.take(OVER), Input::Restart);
        assert_eq!(pending, PendingInput::default());
    }
}
