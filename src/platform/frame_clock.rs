//! Display frames -> simulation steps

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Decides how many ticks to run for each display frame.
///
/// Variable mode runs exactly one tick per frame, so the game speed follows
/// the display refresh rate. Fixed mode accumulates elapsed time and runs
/// whole `SIM_DT` steps, capped at `MAX_SUBSTEPS` per frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    fixed: bool,
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new(fixed: bool) -> Self {
        Self {
            fixed,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed the frame timestamp in milliseconds; returns ticks to run
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);

        if !self.fixed {
            return 1;
        }

        self.accumulator += dt.clamp(0.0, 0.1);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog rather than chase it
            self.accumulator = 0.0;
        }
        steps
    }

    /// Forget timing history (after the loop was stopped)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_mode_one_tick_per_frame() {
        let mut clock = FrameClock::new(false);
        assert_eq!(clock.advance(0.0), 1);
        assert_eq!(clock.advance(100.0), 1);
        assert_eq!(clock.advance(100.5), 1);
    }

    #[test]
    fn test_fixed_mode_first_frame_runs_one_step() {
        let mut clock = FrameClock::new(true);
        assert_eq!(clock.advance(5_000.0), 1);
    }

    #[test]
    fn test_fixed_mode_accumulates() {
        let mut clock = FrameClock::new(true);
        clock.advance(0.0);
        // 120 Hz display: every other frame runs a step
        let steps: u32 = (1..=120).map(|i| clock.advance(i as f64 * 1000.0 / 120.0)).sum();
        assert!((59..=61).contains(&steps), "got {steps}");
    }

    #[test]
    fn test_fixed_mode_caps_substeps() {
        let mut clock = FrameClock::new(true);
        clock.advance(0.0);
        assert_eq!(clock.advance(2_000.0), MAX_SUBSTEPS);
        // Backlog dropped
        assert!(clock.advance(2_001.0) <= 1);
    }

    #[test]
    fn test_reset_forgets_last_time() {
        let mut clock = FrameClock::new(true);
        clock.advance(0.0);
        clock.reset();
        assert_eq!(clock.advance(10_000.0), 1);
    }
}
