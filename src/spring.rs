use crate::{
    error::SimulationError,
    render::{Canvas, SPRING_COLOR},
    simulation::PointMass,
    vector::Vector2,
};

pub const DEFAULT_REST_LENGTH: f64 = 100.0;
pub const DEFAULT_STIFFNESS_DIVISOR: f64 = 16.0;

/// Elastic link between two points, stored as indices into the point list.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub(crate) first: usize,
    pub(crate) second: usize,
    pub(crate) rest_length: f64,
    pub(crate) stiffness_divisor: f64,
}
impl Spring {
    pub fn new(first: usize, second: usize) -> Self {
        Self {
            first,
            second,
            rest_length: DEFAULT_REST_LENGTH,
            stiffness_divisor: DEFAULT_STIFFNESS_DIVISOR,
        }
    }

    pub fn rest_length(mut self, val: f64) -> Self {
        self.rest_length = val;
        self
    }
    /// Sets how soft the spring is.
    /// The correction applied each tick is the extension divided by this value
    pub fn stiffness_divisor(mut self, val: f64) -> Self {
        self.stiffness_divisor = val;
        self
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Whether this spring joins `a` and `b`, in either order.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    fn positions(&self, points: &[PointMass]) -> Result<(Vector2, Vector2), SimulationError> {
        let count = points.len();
        let first = points
            .get(self.first)
            .ok_or(SimulationError::PointOutOfBounds { index: self.first, count })?;
        let second = points
            .get(self.second)
            .ok_or(SimulationError::PointOutOfBounds { index: self.second, count })?;
        Ok((first.position, second.position))
    }

    pub fn length(&self, points: &[PointMass]) -> Result<f64, SimulationError> {
        let (first, second) = self.positions(points)?;
        Ok((second - first).length())
    }

    /// Pushes both endpoints toward the rest length.
    ///
    /// The correction is added straight to the velocities, equal and opposite, and is not
    /// scaled by the frame adjustment.
    pub fn update(&self, points: &mut [PointMass]) -> Result<(), SimulationError> {
        let (first, second) = self.positions(points)?;
        let difference = second - first;
        let extension = difference.length() - self.rest_length;
        let correction = difference.normalize().divide(self.stiffness_divisor)? * extension;

        points[self.first].velocity += correction;
        points[self.second].velocity -= correction;
        Ok(())
    }

    pub fn draw(&self, points: &[PointMass], canvas: &mut impl Canvas) -> Result<(), SimulationError> {
        let (first, second) = self.positions(points)?;
        canvas.line(first, second, SPRING_COLOR);
        Ok(())
    }
}
