//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    geometry::ArcFrame,
    pulse::PulseInstruction,
    render::DrawCommand,
    state::{Direction, DurationField, DurationInput, RunState, Step, TimerState},
    utils::format_elapsed,
};

/// Body of POST /timer/configure
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfigureRequest {
    pub minutes: u32,
    pub seconds: u32,
}

/// Body of POST /timer/adjust
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjustRequest {
    pub field: DurationField,
    pub step: Step,
}

/// Timer view returned by every timer endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerStatus {
    pub total_seconds: u64,
    pub elapsed_seconds: u64,
    pub remaining_seconds: u64,
    pub direction: Direction,
    pub run_state: RunState,
    pub label: String,
    pub input: DurationInput,
}

impl TimerStatus {
    pub fn new(state: TimerState, input: DurationInput) -> Self {
        Self {
            total_seconds: state.total_seconds,
            elapsed_seconds: state.elapsed_seconds,
            remaining_seconds: state.remaining_seconds(),
            direction: state.direction,
            run_state: state.run_state,
            label: format_elapsed(state.remaining_seconds()),
            input,
        }
    }
}

/// API response structure for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerStatus,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerStatus) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Response whose status mirrors the timer's run state
    pub fn for_timer(message: String, timer: TimerStatus) -> Self {
        let status = timer.run_state.to_string();
        Self::new(status, message, timer)
    }

    /// Create an error response
    pub fn error(message: String, timer: TimerStatus) -> Self {
        Self::new("error".to_string(), message, timer)
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerStatus,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Everything the display layer needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResponse {
    pub elapsed_seconds: u64,
    pub total_seconds: u64,
    pub label: String,
    pub arc: ArcFrame,
    pub pulse: PulseInstruction,
    pub commands: Vec<DrawCommand>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
