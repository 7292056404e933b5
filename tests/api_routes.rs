use std::sync::Arc;

use arc_timer::{
    api::create_router,
    render::DialRenderer,
    state::{AppState, DurationInput},
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        DurationInput::new(0, 20).unwrap(),
        DialRenderer::square(300.0),
    ));
    (Arc::clone(&state), create_router(state))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (_, router) = app();
    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn configure_sets_total_and_label() {
    let (_, router) = app();
    let (status, body) = send(
        &router,
        "POST",
        "/timer/configure",
        Some(json!({ "minutes": 1, "seconds": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stopped");
    assert_eq!(body["timer"]["total_seconds"], 90);
    assert_eq!(body["timer"]["label"], "01:30");
    assert_eq!(body["timer"]["input"]["minutes"]["value"], 1);
}

#[tokio::test]
async fn out_of_range_configure_is_unprocessable() {
    let (state, router) = app();
    let (status, body) = send(
        &router,
        "POST",
        "/timer/configure",
        Some(json!({ "minutes": 10, "seconds": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(state.engine.snapshot().total_seconds, 20);
}

#[tokio::test]
async fn cancel_while_stopped_conflicts() {
    let (_, router) = app();
    let (status, body) = send(&router, "POST", "/timer/cancel", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["timer"]["run_state"], "stopped");
}

#[tokio::test(start_paused = true)]
async fn start_then_toggle() {
    let (state, router) = app();

    let (status, body) = send(&router, "POST", "/timer/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["direction"], "forward");

    let (status, _) = send(&router, "POST", "/timer/start", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &router,
        "POST",
        "/timer/adjust",
        Some(json!({ "field": "seconds", "step": "up" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(&router, "POST", "/timer/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stopped");
    assert!(!state.engine.snapshot().is_running());
}

#[tokio::test]
async fn adjust_steps_the_selector() {
    let (_, router) = app();
    let (status, body) = send(
        &router,
        "POST",
        "/timer/adjust",
        Some(json!({ "field": "seconds", "step": "up" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["total_seconds"], 21);
}

#[tokio::test]
async fn frame_describes_the_dial() {
    let (_, router) = app();
    let (status, body) = send(&router, "GET", "/timer/frame", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "00:20");
    assert_eq!(body["arc"]["sweep_angle_degrees"], 0.0);
    assert_eq!(body["pulse"]["repeats"], 0);

    let commands = body["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 2 + 35);
    assert_eq!(commands[0]["kind"], "arc");
    assert_eq!(commands[1]["kind"], "line");
}

#[tokio::test]
async fn status_includes_server_metadata() {
    let (_, router) = app();
    send(&router, "POST", "/timer/configure", Some(json!({ "minutes": 0, "seconds": 5 }))).await;
    let (status, body) = send(&router, "GET", "/timer/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["host"], "127.0.0.1");
    assert_eq!(body["last_action"], "configure");
    assert_eq!(body["timer"]["remaining_seconds"], 5);
}
