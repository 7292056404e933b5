//! State management module
//!
//! This module contains the timer snapshot, the duration input and the
//! application state shared by the HTTP handlers.

pub mod app_state;
pub mod duration_input;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use duration_input::{BoundedSelector, DurationField, DurationInput, Step};
pub use timer_state::{Direction, RunState, TickCause, TickEvent, TimerState, FORWARD_TICK, REVERSE_TICK};
