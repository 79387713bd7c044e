//! Per-frame simulation tick
//!
//! One call advances the game by exactly one step. The host renders the
//! current state just before calling it.

use super::collision::{
    BottomContact, bottom_contact, brick_hits, hits_ceiling, hits_side_wall, steering_dx,
};
use super::state::{GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move-left held (keys or on-screen button)
    pub move_left: bool,
    /// Move-right held (keys or on-screen button)
    pub move_right: bool,
    /// Absolute pointer x in playfield units (mouse/touch)
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one step
///
/// Does nothing unless the game is running, so a frame that was already
/// scheduled when the game stopped is harmless.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;
    let width = state.tuning.playfield_width;
    let height = state.tuning.playfield_height;
    let paddle_max_x = state.tuning.paddle_max_x();

    // Pointer places the paddle directly
    if let Some(x) = input.pointer_x {
        state.paddle.center_on(x, paddle_max_x);
    }

    // --- BRICKS ---
    let hits = brick_hits(&state.bricks, state.ball.pos, state.tuning.brick_hits);
    if hits.len() > 1 {
        log::debug!("Ball centre inside {} bricks this tick", hits.len());
    }
    for &i in &hits {
        let brick = &mut state.bricks.bricks[i];
        brick.alive = false;
        let (column, row) = (brick.column, brick.row);
        state.score += 1;
        state.emit(GameEvent::BrickBroken { column, row });
        state.emit(GameEvent::ScoreChanged(state.score));
    }
    if !hits.is_empty() {
        state.ball.vel.y = -state.ball.vel.y;
        if state.all_bricks_cleared() {
            log::info!("All {} bricks cleared", state.tuning.total_bricks());
            state.emit(GameEvent::Won);
            state.end_game();
            return;
        }
    }

    // --- WALLS ---
    if hits_side_wall(&state.ball, width) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if hits_ceiling(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    } else {
        // --- PADDLE / FLOOR ---
        match bottom_contact(&state.ball, &state.paddle, height) {
            BottomContact::Paddle => {
                state.ball.vel.y = -state.ball.vel.y;
                state.ball.vel.x =
                    steering_dx(state.ball.pos.x, &state.paddle, state.tuning.steering);
                state.emit(GameEvent::PaddleHit);
            }
            BottomContact::Miss => {
                state.lives = state.lives.saturating_sub(1);
                state.emit(GameEvent::BallLost);
                state.emit(GameEvent::LivesChanged(state.lives));
                if state.lives == 0 {
                    log::info!("Game over with score {}", state.score);
                    state.emit(GameEvent::GameOver);
                    state.end_game();
                    return;
                }
                log::info!("Ball lost, {} lives left", state.lives);
                state.reset_ball_and_paddle();
            }
            BottomContact::Clear => {}
        }
    }

    // --- PADDLE MOVEMENT ---
    let step = state.tuning.paddle_step;
    if input.move_right && state.paddle.right() < width {
        state.paddle.x = (state.paddle.x + step).min(paddle_max_x);
    } else if input.move_left && state.paddle.x > 0.0 {
        state.paddle.x = (state.paddle.x - step).max(0.0);
    }

    // --- INTEGRATE ---
    let ball = &mut state.ball;
    ball.pos += ball.vel;
    ball.pos.x = ball.pos.x.clamp(ball.radius, (width - ball.radius).max(ball.radius));
}
