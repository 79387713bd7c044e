//! Input state shared between event handlers and the game loop
//!
//! Handlers only write here; the loop reads one `TickInput` per step.
//! Several physical sources can hold the same direction (arrow key plus
//! on-screen button), and the direction stays active until every source
//! lets go.

use crate::sim::{GameState, TickInput, autopilot_input};

/// Logical paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Physical source holding a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Touch,
    Mouse,
}

impl InputSource {
    fn bit(self) -> u8 {
        match self {
            InputSource::Keyboard => 1,
            InputSource::Touch => 1 << 1,
            InputSource::Mouse => 1 << 2,
        }
    }
}

/// Map a `KeyboardEvent.key` value to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowRight" | "Right" => Some(Direction::Right),
        _ => None,
    }
}

/// Convert a pointer offset in CSS pixels to playfield units
pub fn to_playfield_x(offset_x: f32, client_width: f32, playfield_width: f32) -> f32 {
    if client_width <= 0.0 {
        return offset_x;
    }
    offset_x * playfield_width / client_width
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: u8,
    right: u8,
    pointer_x: Option<f32>,
    pointer_enabled: bool,
    /// Autopilot drives the paddle
    pub demo_mode: bool,
}

impl InputState {
    pub fn new(pointer_enabled: bool) -> Self {
        Self {
            pointer_enabled,
            ..Default::default()
        }
    }

    fn mask_mut(&mut self, direction: Direction) -> &mut u8 {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub fn press(&mut self, direction: Direction, source: InputSource) {
        *self.mask_mut(direction) |= source.bit();
    }

    pub fn release(&mut self, direction: Direction, source: InputSource) {
        *self.mask_mut(direction) &= !source.bit();
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left != 0,
            Direction::Right => self.right != 0,
        }
    }

    /// Returns true if the key controls the paddle
    pub fn key_down(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(direction) => {
                self.press(direction, InputSource::Keyboard);
                true
            }
            None => false,
        }
    }

    /// Returns true if the key controls the paddle
    pub fn key_up(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(direction) => {
                self.release(direction, InputSource::Keyboard);
                true
            }
            None => false,
        }
    }

    /// Record the latest pointer position (playfield units).
    /// Moves made while the game isn't running are ignored.
    pub fn pointer_moved(&mut self, x: f32, state: &GameState) {
        if self.pointer_enabled && state.is_running() {
            self.pointer_x = Some(x);
        }
    }

    /// Forget any pointer position not yet consumed by a tick
    pub fn clear_pointer(&mut self) {
        self.pointer_x = None;
    }

    pub fn toggle_demo(&mut self) -> bool {
        self.demo_mode = !self.demo_mode;
        self.demo_mode
    }

    /// Input for the next step. The pointer position is consumed, and
    /// dropped entirely while the game isn't running.
    pub fn take_tick_input(&mut self, state: &GameState) -> TickInput {
        let pointer_x = self.pointer_x.take();
        if self.demo_mode {
            return autopilot_input(state);
        }
        TickInput {
            move_left: self.is_held(Direction::Left),
            move_right: self.is_held(Direction::Right),
            pointer_x: if state.is_running() { pointer_x } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    fn running() -> GameState {
        let mut state = GameState::default();
        state.start();
        state
    }

    #[test]
    fn test_arrow_keys() {
        let mut input = InputState::new(true);
        assert!(input.key_down("ArrowRight"));
        assert!(input.is_held(Direction::Right));
        assert!(input.key_up("Right"));
        assert!(!input.is_held(Direction::Right));
        assert!(!input.key_down("a"));
        assert!(input.key_down("Left"));
        assert!(input.is_held(Direction::Left));
    }

    #[test]
    fn test_direction_held_until_all_sources_release() {
        let mut input = InputState::new(true);
        input.press(Direction::Left, InputSource::Keyboard);
        input.press(Direction::Left, InputSource::Touch);

        input.release(Direction::Left, InputSource::Keyboard);
        assert!(input.is_held(Direction::Left));

        input.release(Direction::Left, InputSource::Touch);
        assert!(!input.is_held(Direction::Left));
    }

    #[test]
    fn test_release_without_press_is_harmless() {
        let mut input = InputState::new(true);
        input.release(Direction::Right, InputSource::Mouse);
        assert!(!input.is_held(Direction::Right));
    }

    #[test]
    fn test_tick_input_reports_both_directions() {
        let mut input = InputState::new(true);
        input.press(Direction::Left, InputSource::Mouse);
        input.press(Direction::Right, InputSource::Keyboard);
        let tick = input.take_tick_input(&running());
        assert!(tick.move_left && tick.move_right);
    }

    #[test]
    fn test_pointer_consumed_once() {
        let mut input = InputState::new(true);
        let state = running();
        input.pointer_moved(120.0, &state);
        assert_eq!(input.take_tick_input(&state).pointer_x, Some(120.0));
        assert_eq!(input.take_tick_input(&state).pointer_x, None);
    }

    #[test]
    fn test_pointer_ignored_when_idle_or_disabled() {
        let mut input = InputState::new(true);
        input.pointer_moved(120.0, &GameState::default());
        assert_eq!(input.take_tick_input(&running()).pointer_x, None);

        let mut input = InputState::new(false);
        input.pointer_moved(120.0, &running());
        assert_eq!(input.take_tick_input(&running()).pointer_x, None);
    }

    #[test]
    fn test_move_before_start_does_not_snap_paddle() {
        let mut input = InputState::new(true);
        let mut state = GameState::default();
        input.pointer_moved(30.0, &state);
        state.start();

        let first = input.take_tick_input(&state);
        assert_eq!(first.pointer_x, None);
        let paddle_x = state.paddle.x;
        tick(&mut state, &first);
        assert_eq!(state.paddle.x, paddle_x);
    }

    #[test]
    fn test_clear_pointer_drops_leftover_move() {
        let mut input = InputState::new(true);
        let mut state = running();
        input.pointer_moved(30.0, &state);
        // Game ends with the move still pending, then a new one starts
        state.restart();
        input.clear_pointer();
        assert_eq!(input.take_tick_input(&state).pointer_x, None);
    }

    #[test]
    fn test_demo_mode_overrides_player() {
        let mut input = InputState::new(true);
        input.press(Direction::Right, InputSource::Keyboard);
        assert!(input.toggle_demo());
        let state = running();
        let tick = input.take_tick_input(&state);
        assert!(!tick.move_right);
        assert!(tick.pointer_x.is_some());
    }

    #[test]
    fn test_to_playfield_x_scales() {
        assert_eq!(to_playfield_x(265.0, 1060.0, 530.0), 132.5);
        assert_eq!(to_playfield_x(50.0, 0.0, 530.0), 50.0);
    }
}
