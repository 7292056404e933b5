//! Geometry module
//!
//! Stateless arc math and the small plane helpers the renderer needs.

pub mod arc;
pub mod point;

pub use arc::{compute_arc_frame, ArcFrame, FULL_TURN_DEGREES, TICK_STEP_DEGREES};
pub use point::{point_on_circle, radians, rotate_about, Point};
