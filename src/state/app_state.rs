//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::{DurationField, DurationInput, RunState, Step, TimerState};
use crate::{
    engine::TimerEngine,
    error::TimerError,
    render::DialRenderer,
};

/// Main application state shared by the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// The single timer instance
    pub engine: TimerEngine,
    /// Selector values backing the configured duration
    pub input: Arc<Mutex<DurationInput>>,
    /// Dial geometry used for rendered frames
    pub renderer: DialRenderer,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create the state with a stopped timer of `input`'s duration
    pub fn new(port: u16, host: String, input: DurationInput, renderer: DialRenderer) -> Self {
        Self {
            engine: TimerEngine::new(input.total_seconds()),
            input: Arc::new(Mutex::new(input)),
            renderer,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn log_rejected<T>(action: &str, result: Result<T, TimerError>) -> Result<T, TimerError> {
        if let Err(e) = &result {
            warn!("Rejected {}: {}", action, e);
        }
        result
    }

    /// Set minutes and seconds directly
    pub fn configure(&self, minutes: u32, seconds: u32) -> Result<TimerState, TimerError> {
        let result = DurationInput::new(minutes, seconds).and_then(|input| {
            let mut current = self.input.lock().unwrap_or_else(|e| e.into_inner());
            let state = self.engine.configure(minutes, seconds)?;
            *current = input;
            Ok(state)
        });
        let state = Self::log_rejected("configure", result)?;
        self.record_action("configure");
        Ok(state)
    }

    /// Step one selector up or down and apply the new duration
    pub fn adjust(&self, field: DurationField, step: Step) -> Result<TimerState, TimerError> {
        let result = {
            let mut current = self.input.lock().unwrap_or_else(|e| e.into_inner());
            let next = current.adjusted(field, step);
            self.engine
                .configure(next.minutes.value, next.seconds.value)
                .map(|state| {
                    *current = next;
                    state
                })
        };
        let state = Self::log_rejected("adjust", result)?;
        info!("Adjusted {:?} {:?}", field, step);
        self.record_action("adjust");
        Ok(state)
    }

    pub fn start(&self) -> Result<TimerState, TimerError> {
        let state = Self::log_rejected("start", self.engine.start())?;
        self.record_action("start");
        Ok(state)
    }

    pub fn cancel(&self) -> Result<TimerState, TimerError> {
        let state = Self::log_rejected("cancel", self.engine.cancel())?;
        self.record_action("cancel");
        Ok(state)
    }

    /// Play/pause control: start when stopped, cancel when running
    pub fn toggle(&self) -> Result<RunState, TimerError> {
        let run_state = Self::log_rejected("toggle", self.engine.toggle())?;
        self.record_action(match run_state {
            RunState::Running => "toggle-start",
            RunState::Stopped => "toggle-cancel",
        });
        Ok(run_state)
    }

    /// Current selector values
    pub fn get_input(&self) -> DurationInput {
        *self.input.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
