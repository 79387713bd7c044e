//! Demo mode - the computer plays
//!
//! Drives the paddle through the same pointer input a player would use, so
//! the simulation cannot tell the difference.

use super::state::GameState;
use super::tick::TickInput;

/// Pointer input that keeps the paddle under the ball
///
/// The paddle centre sits slightly off the ball so rebounds keep changing
/// angle instead of settling into a vertical loop.
pub fn autopilot_input(state: &GameState) -> TickInput {
    if !state.is_running() {
        return TickInput::default();
    }

    let time_factor = state.time_ticks as f32 * 0.01;
    let sway = time_factor.sin() * 0.6 + (time_factor * 0.37).sin() * 0.3;
    // Keep the ball comfortably inside the span
    let offset = sway * state.paddle.width * 0.35;

    TickInput {
        pointer_x: Some(state.ball.pos.x + offset),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameEvent, tick};

    #[test]
    fn test_idle_state_gets_no_input() {
        let state = GameState::default();
        assert_eq!(autopilot_input(&state), TickInput::default());
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut state = GameState::default();
        state.start();
        let input = autopilot_input(&state);
        let x = input.pointer_x.expect("pointer set while running");
        assert!((x - state.ball.pos.x).abs() < state.paddle.width / 2.0);
    }

    #[test]
    fn test_autopilot_never_misses_early() {
        let mut state = GameState::default();
        state.start();
        state.drain_events();

        let mut bricks_broken = 0;
        for _ in 0..5_000 {
            let input = autopilot_input(&state);
            tick(&mut state, &input);
            for event in state.drain_events() {
                assert_ne!(event, GameEvent::BallLost);
                if matches!(event, GameEvent::BrickBroken { .. }) {
                    bricks_broken += 1;
                }
            }
            if !state.is_running() {
                break;
            }
        }
        assert!(bricks_broken > 0);
    }
}
