//! Error types for timer commands

use thiserror::Error;

use crate::state::RunState;

/// Errors surfaced by the timer engine and the duration input
///
/// These are contract violations by the caller, never transient conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("invalid duration: {field} = {value} is outside 0..={max}")]
    InvalidDuration {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("invalid duration: the timer cannot be configured while running")]
    ConfigureWhileRunning,

    #[error("invalid state: cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: RunState,
    },
}

impl TimerError {
    /// Whether this error belongs to the invalid-duration family
    pub fn is_invalid_duration(&self) -> bool {
        matches!(
            self,
            TimerError::InvalidDuration { .. } | TimerError::ConfigureWhileRunning
        )
    }
}
