use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use macroquad::{math::Vec2, rand::gen_range};

use crate::error::SimulationError;

/// A 2D vector with value semantics. Every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}
impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Scales by `1 / scalar`. Fails on an exactly zero divisor.
    pub fn divide(self, scalar: f64) -> Result<Self, SimulationError> {
        if scalar == 0.0 {
            return Err(SimulationError::DivisionByZero);
        }
        Ok(self * (1.0 / scalar))
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector gives a random vector with both components in `[-0.5, 0.5]`.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            return self * (1.0 / length);
        }
        Self::new(gen_range(-0.5, 0.5), gen_range(-0.5, 0.5))
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self + other * -1.0
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x as f32, v.y as f32)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}
