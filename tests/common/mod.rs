use macroquad::color::Color;
use springs::{Bounds, Canvas, Vector2};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle(Vector2, f64, Color),
    Line(Vector2, Vector2, Color),
}

/// Canvas that records what would have been drawn.
pub struct RecordingCanvas {
    pub bounds: Bounds,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingCanvas { bounds: Bounds::new(width, height), calls: Vec::new() }
    }
}

impl Canvas for RecordingCanvas {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }
    fn circle(&mut self, center: Vector2, radius: f64, color: Color) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }
    fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
        self.calls.push(DrawCall::Line(from, to, color));
    }
}
