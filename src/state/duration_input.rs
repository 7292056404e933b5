//! Bounded minute/second selectors feeding the timer configuration

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

pub const MAX_MINUTES: u32 = 9;
pub const MAX_SECONDS: u32 = 59;

/// A stepper over an inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedSelector {
    pub min: u32,
    pub max: u32,
    pub value: u32,
}

impl BoundedSelector {
    pub fn new(min: u32, max: u32, value: u32) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max),
        }
    }

    /// The up control is disabled at the upper bound
    pub fn can_increment(&self) -> bool {
        self.value != self.max
    }

    /// The down control is disabled at the lower bound
    pub fn can_decrement(&self) -> bool {
        self.value != self.min
    }

    pub fn increment(&mut self) -> u32 {
        self.value = (self.value + 1).clamp(self.min, self.max);
        self.value
    }

    pub fn decrement(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1).clamp(self.min, self.max);
        self.value
    }
}

/// Which selector an adjustment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationField {
    Minutes,
    Seconds,
}

/// Step applied by an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Up,
    Down,
}

/// The minutes:seconds input pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInput {
    pub minutes: BoundedSelector,
    pub seconds: BoundedSelector,
}

impl DurationInput {
    /// Create an input, rejecting out-of-range components
    pub fn new(minutes: u32, seconds: u32) -> Result<Self, TimerError> {
        validate(minutes, seconds)?;
        Ok(Self {
            minutes: BoundedSelector::new(0, MAX_MINUTES, minutes),
            seconds: BoundedSelector::new(0, MAX_SECONDS, seconds),
        })
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes.value) * 60 + u64::from(self.seconds.value)
    }

    /// Return a copy with one selector stepped
    pub fn adjusted(&self, field: DurationField, step: Step) -> Self {
        let mut next = *self;
        let selector = match field {
            DurationField::Minutes => &mut next.minutes,
            DurationField::Seconds => &mut next.seconds,
        };
        match step {
            Step::Up => selector.increment(),
            Step::Down => selector.decrement(),
        };
        next
    }
}

impl Default for DurationInput {
    fn default() -> Self {
        Self {
            minutes: BoundedSelector::new(0, MAX_MINUTES, 0),
            seconds: BoundedSelector::new(0, MAX_SECONDS, 0),
        }
    }
}

/// Check minutes and seconds against their selector ranges
pub fn validate(minutes: u32, seconds: u32) -> Result<(), TimerError> {
    if minutes > MAX_MINUTES {
        return Err(TimerError::InvalidDuration {
            field: "minutes",
            value: minutes,
            max: MAX_MINUTES,
        });
    }
    if seconds > MAX_SECONDS {
        return Err(TimerError::InvalidDuration {
            field: "seconds",
            value: seconds,
            max: MAX_SECONDS,
        });
    }
    Ok(())
}
