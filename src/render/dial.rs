//! Dial renderer: turns an arc frame into canvas calls

use serde::{Deserialize, Serialize};

use super::canvas::{ArcStroke, Canvas, LineStroke, Stroke, StrokeCap, DIAL_GRADIENT};
use crate::geometry::{compute_arc_frame, point_on_circle, rotate_about, ArcFrame, Point};

/// Rotation applied to the whole dial so that zero sits at 12 o'clock
pub const DIAL_ROTATION_DEGREES: f32 = -90.0;

/// Marker and tick length as a fraction of the radius
pub const SEGMENT_LENGTH_RATIO: f32 = 0.1;

pub const DEFAULT_STROKE_WIDTH: f32 = 6.0;

/// Renders the progress dial into a `width` x `height` box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialRenderer {
    pub width: f32,
    pub height: f32,
    pub stroke_width: f32,
}

impl DialRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn radius(&self) -> f32 {
        let center = self.center();
        center.x.min(center.y)
    }

    /// Draw the dial for `elapsed` of `total` seconds and return its frame
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, elapsed: u64, total: u64) -> ArcFrame {
        let frame = compute_arc_frame(elapsed, total);
        self.draw_frame(canvas, &frame);
        frame
    }

    /// Draw an already computed frame: arc, lead marker, then remaining ticks
    pub fn draw_frame<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: &ArcFrame) {
        let center = self.center();
        let radius = self.radius();
        let segment = radius * SEGMENT_LENGTH_RATIO;

        canvas.draw_arc(ArcStroke {
            center,
            radius,
            start_angle_degrees: DIAL_ROTATION_DEGREES,
            sweep_angle_degrees: frame.sweep_angle_degrees,
            stroke: self.stroke(),
        });

        // The marker ends on the arc tip and swings about it by the lead angle
        let tip = point_on_circle(center, radius, frame.sweep_angle_degrees);
        let tail = rotate_about(tip.offset(-segment, 0.0), tip, -frame.lead_marker_angle);
        canvas.draw_line(LineStroke {
            start: self.to_dial(tail),
            end: self.to_dial(tip),
            stroke: self.stroke(),
        });

        for &angle in &frame.remaining_tick_angles {
            let angle = f32::from(angle);
            let outer = point_on_circle(center, radius, angle);
            let inner = rotate_about(outer.offset(-segment, 0.0), outer, angle);
            canvas.draw_line(LineStroke {
                start: self.to_dial(outer),
                end: self.to_dial(inner),
                stroke: self.stroke(),
            });
        }
    }

    fn to_dial(&self, point: Point) -> Point {
        rotate_about(point, self.center(), DIAL_ROTATION_DEGREES)
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.stroke_width,
            cap: StrokeCap::Round,
            gradient_center: self.center(),
            gradient: DIAL_GRADIENT.to_vec(),
        }
    }
}
