//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads. A `Tuning` is fixed when a
//! `GameState` is created and never changes while a game is in progress.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens when the ball centre lies inside more than one brick in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickHitPolicy {
    /// Every overlapped brick breaks and scores; `dy` still flips once
    #[default]
    EveryOverlap,
    /// Only the first overlapped brick (column-major order) breaks
    FirstOnly,
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,

    pub ball_radius: f32,
    pub ball_start_velocity: Vec2,
    pub ball_start_offset: f32,

    pub brick_columns: usize,
    pub brick_rows: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
    pub brick_hits: BrickHitPolicy,

    pub starting_lives: u32,
    pub steering: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_start_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),
            ball_start_offset: BALL_START_OFFSET,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
            brick_hits: BrickHitPolicy::EveryOverlap,

            starting_lives: STARTING_LIVES,
            steering: STEERING_COEFFICIENT,
        }
    }
}

impl Tuning {
    /// Number of bricks in a full grid
    pub fn total_bricks(&self) -> u32 {
        (self.brick_columns * self.brick_rows) as u32
    }

    /// Ball serve position (centre, a fixed distance above the bottom)
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width / 2.0,
            self.playfield_height - self.ball_start_offset,
        )
    }

    /// Paddle x that centres it in the playfield
    pub fn paddle_start_x(&self) -> f32 {
        (self.playfield_width - self.paddle_width) / 2.0
    }

    /// Largest legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        (self.playfield_width - self.paddle_width).max(0.0)
    }

    /// Top-left corner of the brick at (column, row)
    pub fn brick_origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.brick_width + self.brick_padding) + self.brick_offset_left,
            row as f32 * (self.brick_height + self.brick_padding) + self.brick_offset_top,
        )
    }
}
