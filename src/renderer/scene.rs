//! Scene assembly: game state -> triangle list

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Segments used for the ball
const BALL_SEGMENTS: u32 = 24;
/// Brick border width
const OUTLINE_WIDTH: f32 = 1.0;

/// Build one frame: live bricks, then ball, then paddle.
/// The background comes from the render pass clear.
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let alive = state.bricks.alive_count();
    let mut vertices = Vec::with_capacity(alive * 30 + BALL_SEGMENTS as usize * 3 + 6);

    for brick in state.bricks.alive() {
        vertices.extend(shapes::rect(brick.pos, brick.size, colors::brick(brick.row)));
        vertices.extend(shapes::rect_outline(
            brick.pos,
            brick.size,
            OUTLINE_WIDTH,
            colors::BRICK_OUTLINE,
        ));
    }

    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    let paddle = &state.paddle;
    vertices.extend(shapes::rect(
        Vec2::new(paddle.x, state.tuning.playfield_height - paddle.height),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALL_VERTS: usize = BALL_SEGMENTS as usize * 3;

    #[test]
    fn test_full_grid_scene() {
        let state = GameState::default();
        let v = build_scene(&state);
        assert_eq!(v.len(), 40 * 30 + BALL_VERTS + 6);
    }

    #[test]
    fn test_dead_bricks_not_drawn() {
        let mut state = GameState::default();
        for brick in state.bricks.bricks.iter_mut().take(10) {
            brick.alive = false;
        }
        let v = build_scene(&state);
        assert_eq!(v.len(), 30 * 30 + BALL_VERTS + 6);
    }

    #[test]
    fn test_rows_use_palette() {
        let state = GameState::default();
        let v = build_scene(&state);
        // First brick drawn is (0, 0), second is (0, 1)
        assert_eq!(v[0].color, colors::brick(0));
        assert_eq!(v[30].color, colors::brick(1));
    }

    #[test]
    fn test_paddle_drawn_on_bottom_edge() {
        let state = GameState::default();
        let v = build_scene(&state);
        let paddle = &v[v.len() - 6..];
        let max_y = paddle.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        let min_y = paddle.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        assert_eq!(max_y, 400.0);
        assert_eq!(min_y, 390.0);
        assert!(paddle.iter().all(|v| v.color == colors::PADDLE));
    }
}
