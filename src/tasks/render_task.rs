//! Render observer background task

use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{
    engine::TimerEngine,
    pulse::pulse_plan,
    render::{DialRenderer, RecordingCanvas},
    utils::format_elapsed,
};

/// Background task that renders a dial frame for every timer change.
///
/// Pulses are planned once per distinct elapsed value.
pub async fn render_task(engine: TimerEngine, renderer: DialRenderer) {
    info!("Starting render task");

    let mut ticks = engine.subscribe_ticks();
    let mut last_pulsed = None;

    loop {
        match ticks.recv().await {
            Ok(event) => {
                let mut canvas = RecordingCanvas::new();
                let frame = renderer.render(&mut canvas, event.elapsed_seconds, event.total_seconds);
                let label = format_elapsed(event.total_seconds.abs_diff(event.elapsed_seconds));

                debug!(
                    cause = ?event.cause,
                    sweep = frame.sweep_angle_degrees,
                    lead = frame.lead_marker_angle,
                    ticks = frame.remaining_tick_angles.len(),
                    commands = canvas.commands().len(),
                    "Rendered {}",
                    label
                );

                if last_pulsed != Some(event.elapsed_seconds) {
                    last_pulsed = Some(event.elapsed_seconds);
                    let pulse = pulse_plan(event.elapsed_seconds, event.total_seconds);
                    if !pulse.is_none() {
                        debug!(
                            repeats = pulse.repeats,
                            duration_ms = pulse.total_duration().as_millis() as u64,
                            "Pulse readout"
                        );
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Render task lagged, skipped {} timer updates", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Timer engine dropped, stopping render task");
                break;
            }
        }
    }
}
