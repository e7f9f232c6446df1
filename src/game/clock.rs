//! Fixed-step clock
//!
//! Simulation runs at a fixed rate regardless of the display refresh:
//! frame time is accumulated and spent in whole steps.

/// Longest frame time accepted, in seconds (window drags, breakpoints)
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Most steps run for a single rendered frame
pub const MAX_STEPS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(step_seconds: f32) -> Self {
        Self { step: step_seconds, accumulator: 0.0 }
    }

    /// Add one frame's elapsed time and return how many steps to run now
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        // Too far behind: drop the backlog instead of spiralling
        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_frames_run_one_step() {
        let mut clock = FixedStep::new(1.0 / 60.0);
        let total: u32 = (0..60).map(|_| clock.advance(1.0 / 60.0 + 1e-6)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_fast_display_accumulates() {
        let mut clock = FixedStep::new(1.0 / 60.0);
        let total: u32 = (0..120).map(|_| clock.advance(1.0 / 120.0 + 1e-6)).sum();
        assert!((59..=60).contains(&total));
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedStep::new(1.0 / 60.0);
        assert_eq!(clock.advance(10.0), MAX_STEPS_PER_FRAME);
        // Backlog was dropped
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_negative_time_is_ignored() {
        let mut clock = FixedStep::new(1.0 / 60.0);
        assert_eq!(clock.advance(-1.0), 0);
    }
}
