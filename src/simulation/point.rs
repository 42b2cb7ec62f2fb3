use crate::{
    config::SimulationConfig,
    error::SimulationError,
    render::{Canvas, HIGHLIGHT_COLOR, POINT_COLOR},
    vector::Vector2,
};

use super::Bounds;

#[derive(Debug, Clone, PartialEq)]
pub struct PointMass {
    pub(crate) position: Vector2,
    pub(crate) velocity: Vector2,
    pub(crate) highlighted: bool,
    pub(crate) dragged: bool,
}
impl PointMass {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            velocity: Vector2::zero(),
            highlighted: false,
            dragged: false,
        }
    }

    pub fn velocity(mut self, val: Vector2) -> Self {
        self.velocity = val;
        self
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }
    pub fn current_velocity(&self) -> Vector2 {
        self.velocity
    }
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Advances the point by one tick scaled by `adjust`.
    /// A dragged point is only kept inside the bounds, the integrator leaves it alone.
    pub fn update(&mut self, bounds: Bounds, adjust: f64, config: &SimulationConfig) -> Result<(), SimulationError> {
        if !self.dragged {
            self.position += self.velocity * adjust;
            self.velocity += Vector2::new(0.0, config.gravity_accel) * adjust;
            self.velocity = self.velocity.divide(config.air_drag)?;
        }

        self.collide_with_walls(bounds, config);
        Ok(())
    }

    /// Clamps the point inside `bounds`, reflecting and damping the velocity of every wall it
    /// crossed. All four walls are checked so a corner applies both axes in the same tick.
    pub fn collide_with_walls(&mut self, bounds: Bounds, config: &SimulationConfig) {
        let margin = config.radius / 2.0;
        let bounce = 1.0 - config.bounce_restitution_loss;
        let friction = 1.0 - config.friction_coefficient;

        if self.position.x < margin {
            self.position.x = margin;
            self.velocity.x = self.velocity.x.abs() * bounce;
            self.velocity.y *= friction;
        }
        if self.position.y < margin {
            self.position.y = margin;
            self.velocity.y = self.velocity.y.abs() * bounce;
            self.velocity.x *= friction;
        }
        if self.position.x > bounds.width - margin {
            self.position.x = bounds.width - margin;
            self.velocity.x = -self.velocity.x.abs() * bounce;
            self.velocity.y *= friction;
        }
        if self.position.y > bounds.height - margin {
            self.position.y = bounds.height - margin;
            self.velocity.y = -self.velocity.y.abs() * bounce;
            self.velocity.x *= friction;
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas, config: &SimulationConfig) {
        let color = if self.highlighted { HIGHLIGHT_COLOR } else { POINT_COLOR };
        canvas.circle(self.position, config.radius / 2.0, color);
    }

    /// Puts the point under the pointer and stops it.
    pub(crate) fn snap_to(&mut self, position: Vector2) {
        self.position = position;
        self.velocity = Vector2::zero();
    }
}
