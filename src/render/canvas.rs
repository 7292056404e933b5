//! Drawing surface interface and a recording implementation

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Straight-alpha RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }
}

/// A colour anchored at a fraction of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: f32,
    pub color: Color,
}

/// Sweep gradient shared by the arc, the marker and the ticks
pub const DIAL_GRADIENT: [GradientStop; 4] = [
    GradientStop { position: 0.0, color: MAGENTA },
    GradientStop { position: 0.3, color: BLUE },
    GradientStop { position: 0.6, color: RED },
    GradientStop { position: 1.0, color: RED },
];

const MAGENTA: Color = Color { r: 255, g: 0, b: 255, alpha: 0.5 };
const BLUE: Color = Color { r: 0, g: 0, b: 255, alpha: 0.5 };
const RED: Color = Color { r: 255, g: 0, b: 0, alpha: 0.5 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeCap {
    Butt,
    Round,
}

/// Stroke settings common to every primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub cap: StrokeCap,
    /// Centre of the sweep gradient
    pub gradient_center: Point,
    pub gradient: Vec<GradientStop>,
}

/// An arc of a circle, angles in screen degrees (0° at 3 o'clock, clockwise)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcStroke {
    pub center: Point,
    pub radius: f32,
    pub start_angle_degrees: f32,
    pub sweep_angle_degrees: f32,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStroke {
    pub start: Point,
    pub end: Point,
    pub stroke: Stroke,
}

/// The two primitives the dial needs from a drawing surface
pub trait Canvas {
    fn draw_arc(&mut self, arc: ArcStroke);
    fn draw_line(&mut self, line: LineStroke);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Arc(ArcStroke),
    Line(LineStroke),
}

/// Canvas that keeps the calls instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn draw_arc(&mut self, arc: ArcStroke) {
        self.commands.push(DrawCommand::Arc(arc));
    }

    fn draw_line(&mut self, line: LineStroke) {
        self.commands.push(DrawCommand::Line(line));
    }
}
