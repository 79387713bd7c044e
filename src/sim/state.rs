//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`; the renderer and
//! the host only ever read it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Never started
    Idle,
    /// Ticks advance the simulation
    Running,
    /// Last game ended (won or lost); state is already reset
    Stopped,
}

/// Notifications for the output surface, drained by the host after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LivesChanged(u32),
    BrickBroken { column: usize, row: usize },
    PaddleHit,
    BallLost,
    /// Every brick cleared
    Won,
    /// Lives exhausted
    GameOver,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.ball_start(),
            vel: tuning.ball_start_velocity,
            radius: tuning.ball_radius,
        }
    }

    /// Position one step ahead with the current velocity
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle (sits on the bottom edge)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.paddle_start_x(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Strictly inside the horizontal span
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.right()
    }

    /// Move so the paddle is centred on `x`, kept inside the playfield
    pub fn center_on(&mut self, x: f32, max_x: f32) {
        self.x = (x - self.width / 2.0).clamp(0.0, max_x);
    }
}

/// A single cell of the brick grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Brick {
    /// Point strictly inside the rectangle (edges don't count)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.pos.x
            && p.x < self.pos.x + self.size.x
            && p.y > self.pos.y
            && p.y < self.pos.y + self.size.y
    }
}

/// Fixed columns x rows grid, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub columns: usize,
    pub rows: usize,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.brick_width, tuning.brick_height);
        let mut bricks = Vec::with_capacity(tuning.brick_columns * tuning.brick_rows);
        for column in 0..tuning.brick_columns {
            for row in 0..tuning.brick_rows {
                bricks.push(Brick {
                    column,
                    row,
                    pos: tuning.brick_origin(column, row),
                    size,
                    alive: true,
                });
            }
        }
        Self {
            columns: tuning.brick_columns,
            rows: tuning.brick_rows,
            bricks,
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get(column * self.rows + row)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get_mut(column * self.rows + row)
    }

    pub fn alive(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Bring every brick back
    pub fn revive_all(&mut self) {
        for brick in &mut self.bricks {
            brick.alive = true;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub lives: u32,
    /// Ticks simulated since the last full reset
    pub time_ticks: u64,
    /// Pending notifications for the host
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh game in the `Idle` phase
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            ball: Ball::new(&tuning),
            paddle: Paddle::new(&tuning),
            bricks: BrickGrid::new(&tuning),
            score: 0,
            lives: tuning.starting_lives,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a game.
    ///
    /// From `Idle`/`Stopped` this resets and enters `Running`, returning
    /// `true`. While already running it only resets the board and returns
    /// `false`; the loop keeps running.
    pub fn start(&mut self) -> bool {
        self.reset();
        if self.is_running() {
            log::info!("Start while running: board reset");
            return false;
        }
        self.phase = GamePhase::Running;
        log::info!("Game started");
        true
    }

    /// Reset and run from any phase
    pub fn restart(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        log::info!("Game restarted");
    }

    /// Full reset of score, lives, bricks, ball and paddle. Phase is untouched.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.bricks.revive_all();
        self.reset_ball_and_paddle();
        self.time_ticks = 0;
        self.emit(GameEvent::ScoreChanged(self.score));
        self.emit(GameEvent::LivesChanged(self.lives));
    }

    /// Put ball and paddle back at their start-of-round positions
    pub fn reset_ball_and_paddle(&mut self) {
        self.ball = Ball::new(&self.tuning);
        self.paddle = Paddle::new(&self.tuning);
    }

    /// Full reset, then leave the loop
    pub(crate) fn end_game(&mut self) {
        self.reset();
        self.phase = GamePhase::Stopped;
    }

    pub fn all_bricks_cleared(&self) -> bool {
        self.score >= self.tuning.total_bricks()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all notifications produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: &GameState) -> String {
        serde_json::to_string(state).expect("state serializes")
    }

    #[test]
    fn test_new_state_is_idle_and_full() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.bricks.len(), 40);
        assert_eq!(state.bricks.alive_count(), 40);
        assert_eq!(state.ball.pos, Vec2::new(265.0, 370.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 227.5);
    }

    #[test]
    fn test_grid_is_column_major() {
        let grid = BrickGrid::new(&Tuning::default());
        let brick = grid.get(2, 3).expect("in range");
        assert_eq!((brick.column, brick.row), (2, 3));
        assert_eq!(brick.pos, Vec2::new(150.0, 120.0));
        assert!(grid.get(8, 0).is_none());
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    fn test_brick_contains_is_strict() {
        let grid = BrickGrid::new(&Tuning::default());
        let brick = grid.get(0, 0).expect("in range");
        assert!(brick.contains(Vec2::new(40.0, 35.0)));
        assert!(!brick.contains(Vec2::new(30.0, 35.0)));
        assert!(!brick.contains(Vec2::new(80.0, 35.0)));
        assert!(!brick.contains(Vec2::new(40.0, 50.0)));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = GameState::default();
        state.reset();
        let once = snapshot(&state);
        state.reset();
        state.reset();
        assert_eq!(snapshot(&state), once);
        assert_eq!(snapshot(&GameState::default()), once);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::default();
        state.score = 7;
        state.lives = 1;
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.paddle.x = 0.0;
        if let Some(b) = state.bricks.get_mut(3, 1) {
            b.alive = false;
        }
        state.drain_events();

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.alive_count(), 40);
        assert_eq!(state.ball, Ball::new(&state.tuning));
        assert_eq!(state.paddle, Paddle::new(&state.tuning));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ScoreChanged(0), GameEvent::LivesChanged(3)]
        );
    }

    #[test]
    fn test_start_from_idle_and_while_running() {
        let mut state = GameState::default();
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Running);

        state.score = 5;
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_restart_from_stopped() {
        let mut state = GameState::default();
        state.restart();
        state.end_game();
        assert_eq!(state.phase, GamePhase::Stopped);

        state.restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.start());
    }

    #[test]
    fn test_paddle_center_on_clamps() {
        let t = Tuning::default();
        let mut paddle = Paddle::new(&t);
        paddle.center_on(0.0, t.paddle_max_x());
        assert_eq!(paddle.x, 0.0);
        paddle.center_on(10_000.0, t.paddle_max_x());
        assert_eq!(paddle.x, t.playfield_width - t.paddle_width);
        paddle.center_on(100.0, t.paddle_max_x());
        assert_eq!(paddle.center_x(), 100.0);
    }
}
