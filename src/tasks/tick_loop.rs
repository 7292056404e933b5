//! Periodic ticking task behind a running timer

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::oneshot,
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::debug;

use crate::engine::EngineShared;

/// Drive one run of the timer until it completes or is cancelled.
///
/// The interval is rebuilt whenever the direction changes, so the first
/// reverse tick lands one reverse period after the last forward tick.
pub(crate) async fn tick_loop(
    shared: Arc<EngineShared>,
    run_id: u64,
    mut cancel_rx: oneshot::Receiver<()>,
) {
    let Some(mut period) = shared
        .current_direction(run_id)
        .and_then(|direction| direction.tick_interval())
    else {
        return;
    };
    let mut ticker = phase_interval(period);

    loop {
        tokio::select! {
            biased;

            // Fires on cancel, or when the engine drops the sender
            _ = &mut cancel_rx => {
                debug!(run_id, "tick loop cancelled");
                break;
            }

            _ = ticker.tick() => {
                let Some(state) = shared.advance(run_id) else {
                    break;
                };
                match state.direction.tick_interval() {
                    Some(next) if next != period => {
                        period = next;
                        ticker = phase_interval(period);
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    debug!(run_id, "tick loop finished");
}

/// Interval whose first tick is one full period away
fn phase_interval(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    // A host suspension does not trigger catch-up ticks
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
