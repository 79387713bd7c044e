//! Platform abstraction layer
//!
//! Pieces of the host loop that don't need a browser:
//! - Input state written by event handlers, read once per tick
//! - Frame clock turning display frames into simulation steps

pub mod frame_clock;
pub mod input;

pub use frame_clock::FrameClock;
pub use input::{Direction, InputSource, InputState};
