//! Background tasks module
//!
//! This module contains the timer's ticking task and the render observer
//! that runs alongside the HTTP server.

pub mod render_task;
pub(crate) mod tick_loop;

// Re-export main functions
pub use render_task::render_task;
pub(crate) use tick_loop::tick_loop;
