//! Tunable constants shared by every point and spring.
//!
//! The defaults are tuned for feel on a 60 Hz display rather than any physical units.

use crate::error::SimulationError;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub(crate) radius: f64,
    pub(crate) friction_coefficient: f64,
    pub(crate) bounce_restitution_loss: f64,
    pub(crate) air_drag: f64,
    pub(crate) gravity_accel: f64,
    pub(crate) rest_length: f64,
    pub(crate) stiffness_divisor: f64,
    pub(crate) mouse_threshold: f64,
    pub(crate) target_frame_rate: f64,
    pub(crate) max_adjust: f64,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            friction_coefficient: 0.01,
            bounce_restitution_loss: 0.5,
            air_drag: 1.025,
            gravity_accel: 0.2,
            rest_length: 100.0,
            stiffness_divisor: 16.0,
            mouse_threshold: 50.0,
            target_frame_rate: 60.0,
            max_adjust: 4.0,
        }
    }
}
impl SimulationConfig {
    /// Diameter of the drawn point. Walls stop a point at half of it.
    pub fn radius(mut self, val: f64) -> Self {
        self.radius = val;
        self
    }
    /// Fraction of the tangential velocity lost when touching a wall
    pub fn friction(mut self, val: f64) -> Self {
        self.friction_coefficient = val;
        self
    }
    /// Fraction of the normal velocity lost on a wall bounce.
    /// `0.0` is a perfectly elastic bounce, `1.0` stops the point dead
    pub fn bounce_loss(mut self, val: f64) -> Self {
        self.bounce_restitution_loss = val;
        self
    }
    /// Velocity is divided by this every tick
    pub fn air_drag(mut self, val: f64) -> Self {
        self.air_drag = val;
        self
    }
    pub fn gravity(mut self, val: f64) -> Self {
        self.gravity_accel = val;
        self
    }
    pub fn rest_length(mut self, val: f64) -> Self {
        self.rest_length = val;
        self
    }
    /// Larger values give softer springs
    pub fn stiffness_divisor(mut self, val: f64) -> Self {
        self.stiffness_divisor = val;
        self
    }
    /// Maximum distance between the pointer and a point for it to be selected
    pub fn mouse_threshold(mut self, val: f64) -> Self {
        self.mouse_threshold = val;
        self
    }
    pub fn target_frame_rate(mut self, val: f64) -> Self {
        self.target_frame_rate = val;
        self
    }
    /// Upper bound for the frame adjustment factor
    pub fn max_adjust(mut self, val: f64) -> Self {
        self.max_adjust = val;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let invalid = |field: &'static str, value: f64| Err(SimulationError::InvalidConfig { field, value });

        if !(self.radius > 0.0) {
            return invalid("radius", self.radius);
        }
        if !(0.0..=1.0).contains(&self.friction_coefficient) {
            return invalid("friction_coefficient", self.friction_coefficient);
        }
        if !(0.0..=1.0).contains(&self.bounce_restitution_loss) {
            return invalid("bounce_restitution_loss", self.bounce_restitution_loss);
        }
        if !(self.air_drag > 0.0) {
            return invalid("air_drag", self.air_drag);
        }
        if self.stiffness_divisor == 0.0 || !self.stiffness_divisor.is_finite() {
            return invalid("stiffness_divisor", self.stiffness_divisor);
        }
        if !(self.mouse_threshold >= 0.0) {
            return invalid("mouse_threshold", self.mouse_threshold);
        }
        if !(self.target_frame_rate > 0.0) {
            return invalid("target_frame_rate", self.target_frame_rate);
        }
        if !(self.max_adjust >= 0.0) {
            return invalid("max_adjust", self.max_adjust);
        }
        Ok(())
    }
}
