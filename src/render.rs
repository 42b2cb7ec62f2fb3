use macroquad::prelude::*;

use crate::{simulation::Bounds, vector::Vector2};

pub const BACKGROUND_COLOR: Color = Color::new(0.08, 0.08, 0.1, 1.0);
pub const POINT_COLOR: Color = Color::new(0.2196, 0.8235, 0.5882, 1.0);
pub const HIGHLIGHT_COLOR: Color = Color::new(0.7961, 0.6, 0.7882, 1.0);
pub const SPRING_COLOR: Color = Color::new(0.8706, 0.6471, 0.6431, 1.0);

const SPRING_THICKNESS: f32 = 1.0;

/// The drawing surface the simulation renders onto
pub trait Canvas {
    /// Current size of the drawable area, also used as the collision walls
    fn bounds(&self) -> Bounds;
    fn clear(&mut self);
    fn circle(&mut self, center: Vector2, radius: f64, color: Color);
    fn line(&mut self, from: Vector2, to: Vector2, color: Color);
}

/// Draws into the macroquad window. Only usable once the window exists.
#[derive(Debug, Default)]
pub struct MacroquadCanvas;
impl Canvas for MacroquadCanvas {
    fn bounds(&self) -> Bounds {
        Bounds::new(screen_width() as f64, screen_height() as f64)
    }

    fn clear(&mut self) {
        clear_background(BACKGROUND_COLOR);
    }

    fn circle(&mut self, center: Vector2, radius: f64, color: Color) {
        let center = Vec2::from(center);
        draw_circle(center.x, center.y, radius as f32, color);
    }

    fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
        let (from, to) = (Vec2::from(from), Vec2::from(to));
        draw_line(from.x, from.y, to.x, to.y, SPRING_THICKNESS, color);
    }
}
