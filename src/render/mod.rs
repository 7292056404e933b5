//! Rendering module
//!
//! The drawing surface is external; this module only defines the calls made
//! on it and the dial math that produces them.

pub mod canvas;
pub mod dial;

pub use canvas::{
    ArcStroke, Canvas, Color, DrawCommand, GradientStop, LineStroke, RecordingCanvas, Stroke,
    StrokeCap, DIAL_GRADIENT,
};
pub use dial::DialRenderer;
