//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per step, no clocks
//! - Stable iteration order (column-major brick grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{BottomContact, bottom_contact, brick_hits};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
