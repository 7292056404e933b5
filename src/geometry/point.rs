//! Plane helpers in screen coordinates (y grows downwards)

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Point at `degrees` on a circle; 0° is 3 o'clock, positive is clockwise
pub fn point_on_circle(center: Point, radius: f32, degrees: f32) -> Point {
    let angle = radians(degrees);
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Rotate `point` about `pivot`; positive degrees turn clockwise on screen
pub fn rotate_about(point: Point, pivot: Point, degrees: f32) -> Point {
    let (sin, cos) = radians(degrees).sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
}
