use macroquad::prelude::debug;

use crate::config::SimulationConfig;

/// Turns wall-clock frame times into the factor that scales each integration step,
/// so the simulation moves at the same speed whatever the display refresh rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    target_interval_ms: f64,
    max_adjust: f64,
    last_frame: Option<f64>,
}
impl FrameClock {
    pub fn new(target_frame_rate: f64, max_adjust: f64) -> Self {
        Self {
            target_interval_ms: 1000.0 / target_frame_rate,
            max_adjust,
            last_frame: None,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.target_frame_rate, config.max_adjust)
    }

    /// Adjustment for a frame starting at `now` (seconds).
    /// The first frame has no predecessor and always gets `1.0`.
    pub fn adjust(&mut self, now: f64) -> f64 {
        let Some(last) = self.last_frame.replace(now) else {
            return 1.0;
        };

        let elapsed_ms = (now - last) * 1000.0;
        if elapsed_ms <= 0.0 {
            debug!("non-positive frame time {}ms, using max adjust", elapsed_ms);
            return self.max_adjust;
        }

        let adjust = self.target_interval_ms / elapsed_ms;
        if adjust > self.max_adjust {
            debug!("clamping frame adjust {} to {}", adjust, self.max_adjust);
            return self.max_adjust;
        }
        adjust
    }
}
