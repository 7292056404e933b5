//! Timer engine module
//!
//! The engine exclusively owns elapsed time, run state and direction. All
//! writes happen under one lock, either from the command methods or from the
//! ticking task it spawns.

pub mod timer_engine;

pub(crate) use timer_engine::EngineShared;
pub use timer_engine::TimerEngine;
