//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::{
    error::TimerError,
    pulse::pulse_plan,
    render::RecordingCanvas,
    state::{AppState, TimerState},
    utils::format_elapsed,
};
use super::responses::{
    AdjustRequest, ApiResponse, ConfigureRequest, FrameResponse, HealthResponse, StatusResponse,
    TimerStatus,
};

type ApiResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

fn timer_status(state: &AppState, timer: TimerState) -> TimerStatus {
    TimerStatus::new(timer, state.get_input())
}

fn reject(state: &AppState, error: TimerError) -> (StatusCode, Json<ApiResponse>) {
    let code = match error {
        TimerError::InvalidDuration { .. } | TimerError::ConfigureWhileRunning => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TimerError::InvalidState { .. } => StatusCode::CONFLICT,
    };
    let timer = timer_status(state, state.engine.snapshot());
    (code, Json(ApiResponse::error(error.to_string(), timer)))
}

fn respond(state: &AppState, message: &str, result: Result<TimerState, TimerError>) -> ApiResult {
    match result {
        Ok(timer) => Ok(Json(ApiResponse::for_timer(
            message.to_string(),
            timer_status(state, timer),
        ))),
        Err(e) => Err(reject(state, e)),
    }
}

/// Handle POST /timer/configure - Set minutes and seconds
pub async fn configure_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfigureRequest>,
) -> ApiResult {
    respond(
        &state,
        "Timer configured",
        state.configure(request.minutes, request.seconds),
    )
}

/// Handle POST /timer/adjust - Step a selector up or down
pub async fn adjust_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AdjustRequest>,
) -> ApiResult {
    respond(&state, "Timer adjusted", state.adjust(request.field, request.step))
}

/// Handle POST /timer/start - Start counting
pub async fn start_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    info!("Start endpoint called");
    respond(&state, "Timer started", state.start())
}

/// Handle POST /timer/cancel - Stop counting, keeping elapsed time
pub async fn cancel_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    info!("Cancel endpoint called");
    respond(&state, "Timer cancelled", state.cancel())
}

/// Handle POST /timer/toggle - Play/pause control
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    info!("Toggle endpoint called");
    let result = state.toggle().map(|_| state.engine.snapshot());
    respond(&state, "Timer toggled", result)
}

/// Handle GET /timer/status - Return current timer and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: timer_status(&state, state.engine.snapshot()),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /timer/frame - Render the dial for the current snapshot
pub async fn frame_handler(State(state): State<Arc<AppState>>) -> Json<FrameResponse> {
    let timer = state.engine.snapshot();
    let mut canvas = RecordingCanvas::new();
    let arc = state
        .renderer
        .render(&mut canvas, timer.elapsed_seconds, timer.total_seconds);

    Json(FrameResponse {
        elapsed_seconds: timer.elapsed_seconds,
        total_seconds: timer.total_seconds,
        label: format_elapsed(timer.remaining_seconds()),
        arc,
        pulse: pulse_plan(timer.elapsed_seconds, timer.total_seconds),
        commands: canvas.into_commands(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
