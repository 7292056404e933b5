//! Arc Timer - a countdown timer with a stepped progress arc
//!
//! The engine counts elapsed seconds up to the configured total, then rewinds
//! quickly back to zero. Geometry and pulse planning are pure functions over
//! `(elapsed, total)`, consumed by whatever draws the dial.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod pulse;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use engine::TimerEngine;
pub use error::TimerError;
pub use geometry::{compute_arc_frame, ArcFrame};
pub use pulse::{pulse_plan, PulseInstruction};
pub use state::{AppState, Direction, RunState, TickEvent, TimerState};
pub use utils::signals::shutdown_signal;
