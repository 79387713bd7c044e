//! Brick Breaker - A single-screen block breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Input adapter and frame scheduling
//! - `tuning`: Gameplay constants fixed per game
//! - `settings`: Player preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::InitError;
pub use settings::Settings;
pub use tuning::{BrickHitPolicy, Tuning};

/// Game configuration constants
pub mod consts {
    /// Simulation timestep when fixed-timestep mode is on (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 530.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Keyboard/button movement per tick
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Initial velocity per tick on each axis (y grows downward)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;
    /// Distance of the serve position above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;

    /// Brick grid
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    pub const STARTING_LIVES: u32 = 3;
    /// Paddle hit offset -> horizontal rebound speed
    pub const STEERING_COEFFICIENT: f32 = 0.05;
}
