//! Collision detection for an axis-aligned playfield
//!
//! All checks look one step ahead (`pos + vel`) except the brick test, which
//! uses the current ball centre. None of them mutate state; `tick` applies
//! the responses.

use glam::Vec2;

use super::state::{Ball, BrickGrid, Paddle};
use crate::tuning::BrickHitPolicy;

/// What the ball meets along the bottom edge on its next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomContact {
    /// Not yet at the paddle line, or between the line and the floor
    Clear,
    /// Rebounds off the paddle
    Paddle,
    /// Falls past the floor
    Miss,
}

/// Indices into `grid.bricks` of alive bricks containing `point`
///
/// Column-major order. `FirstOnly` stops at the first hit.
pub fn brick_hits(grid: &BrickGrid, point: Vec2, policy: BrickHitPolicy) -> Vec<usize> {
    let hits = grid
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.alive && b.contains(point))
        .map(|(i, _)| i);

    match policy {
        BrickHitPolicy::EveryOverlap => hits.collect(),
        BrickHitPolicy::FirstOnly => hits.take(1).collect(),
    }
}

/// Next step would cross the left or right wall
pub fn hits_side_wall(ball: &Ball, width: f32) -> bool {
    let next_x = ball.projected().x;
    next_x > width - ball.radius || next_x < ball.radius
}

/// Next step would cross the ceiling
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.projected().y < ball.radius
}

/// Classify the next step against the paddle line and the floor
pub fn bottom_contact(ball: &Ball, paddle: &Paddle, height: f32) -> BottomContact {
    let next_y = ball.projected().y;
    if next_y <= height - ball.radius - paddle.height {
        return BottomContact::Clear;
    }
    if paddle.spans(ball.pos.x) {
        BottomContact::Paddle
    } else if next_y > height - ball.radius {
        BottomContact::Miss
    } else {
        BottomContact::Clear
    }
}

/// Horizontal rebound speed from where the ball struck the paddle
#[inline]
pub fn steering_dx(ball_x: f32, paddle: &Paddle, steering: f32) -> f32 {
    (ball_x - paddle.center_x()) * steering
}
