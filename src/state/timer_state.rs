//! Timer state structure and management

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Interval between forward (counting) ticks
pub const FORWARD_TICK: Duration = Duration::from_millis(1000);

/// Interval between reverse (rewind) ticks
pub const REVERSE_TICK: Duration = Duration::from_millis(100);

/// Which way elapsed time is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reverse,
    Idle,
}

impl Direction {
    /// Tick interval for this direction, `None` when not ticking
    pub fn tick_interval(self) -> Option<Duration> {
        match self {
            Direction::Forward => Some(FORWARD_TICK),
            Direction::Reverse => Some(REVERSE_TICK),
            Direction::Idle => None,
        }
    }
}

/// Whether the ticking process is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Stopped,
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Stopped => f.write_str("stopped"),
            RunState::Running => f.write_str("running"),
        }
    }
}

/// Consistent snapshot of a timer
///
/// `elapsed_seconds` never exceeds `total_seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub total_seconds: u64,
    pub elapsed_seconds: u64,
    pub direction: Direction,
    pub run_state: RunState,
}

impl TimerState {
    /// Create a stopped timer with the given total
    pub fn new(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            elapsed_seconds: 0,
            direction: Direction::Idle,
            run_state: RunState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Seconds shown on the readout, `|total - elapsed|`
    pub fn remaining_seconds(&self) -> u64 {
        self.total_seconds.abs_diff(self.elapsed_seconds)
    }

    /// Apply one scheduled tick.
    ///
    /// Forward ticks flip the direction to reverse on the tick that first
    /// reaches the total; reverse ticks stop the timer on reaching zero.
    /// Returns false if the timer was not ticking.
    pub fn apply_tick(&mut self) -> bool {
        match self.direction {
            Direction::Forward => {
                self.elapsed_seconds = (self.elapsed_seconds + 1).min(self.total_seconds);
                if self.elapsed_seconds == self.total_seconds {
                    self.direction = Direction::Reverse;
                }
                true
            }
            Direction::Reverse => {
                self.elapsed_seconds = self.elapsed_seconds.saturating_sub(1);
                if self.elapsed_seconds == 0 {
                    self.finish();
                }
                true
            }
            Direction::Idle => false,
        }
    }

    /// Stop ticking, keeping elapsed where it is
    pub fn finish(&mut self) {
        self.run_state = RunState::Stopped;
        self.direction = Direction::Idle;
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// What caused a published state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickCause {
    Configure,
    Start,
    Forward,
    Reverse,
    Cancel,
}

/// One observed mutation, emitted to render observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub cause: TickCause,
    pub elapsed_seconds: u64,
    pub total_seconds: u64,
    pub direction: Direction,
    pub run_state: RunState,
}

impl TickEvent {
    pub fn new(cause: TickCause, state: TimerState) -> Self {
        Self {
            cause,
            elapsed_seconds: state.elapsed_seconds,
            total_seconds: state.total_seconds,
            direction: state.direction,
            run_state: state.run_state,
        }
    }
}
