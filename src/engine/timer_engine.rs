//! Timer engine: owns the countdown state and the ticking task

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{broadcast, oneshot, watch};
use tracing::{debug, info};

use crate::{
    error::TimerError,
    state::{duration_input, Direction, RunState, TickCause, TickEvent, TimerState},
    tasks::tick_loop,
};

/// Capacity of the per-tick broadcast channel
const TICK_CHANNEL_CAPACITY: usize = 256;

/// Mutable engine data, only touched under the lock
#[derive(Debug)]
pub(crate) struct EngineCore {
    pub(crate) state: TimerState,
    /// Incremented on every start and cancel; ticks from an older run are dropped
    pub(crate) run_id: u64,
    pub(crate) cancel_tx: Option<oneshot::Sender<()>>,
}

/// State shared between the engine handle and its ticking task
#[derive(Debug)]
pub(crate) struct EngineShared {
    core: Mutex<EngineCore>,
    snapshot_tx: watch::Sender<TimerState>,
    tick_tx: broadcast::Sender<TickEvent>,
}

impl EngineShared {
    pub(crate) fn lock(&self) -> MutexGuard<'_, EngineCore> {
        // Every mutation is a handful of field writes, a poisoned guard still holds a valid state
        self.core.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Publish a snapshot and its tick event; called with the lock held
    fn publish(&self, cause: TickCause, state: TimerState) {
        self.snapshot_tx.send_replace(state);
        // No subscribers is normal when nothing renders
        let _ = self.tick_tx.send(TickEvent::new(cause, state));
    }

    /// Direction of the given run, `None` if the run is no longer current
    pub(crate) fn current_direction(&self, run_id: u64) -> Option<Direction> {
        let core = self.lock();
        (core.run_id == run_id && core.state.is_running()).then_some(core.state.direction)
    }

    /// Apply one scheduled tick for `run_id`.
    ///
    /// Returns the new snapshot, or `None` if the run was cancelled or
    /// superseded, in which case the tick is discarded.
    pub(crate) fn advance(&self, run_id: u64) -> Option<TimerState> {
        let mut core = self.lock();
        if core.run_id != run_id || !core.state.is_running() {
            debug!(run_id, "discarding tick from stale run");
            return None;
        }

        let cause = match core.state.direction {
            Direction::Forward => TickCause::Forward,
            Direction::Reverse => TickCause::Reverse,
            Direction::Idle => return None,
        };
        core.state.apply_tick();
        let state = core.state;

        debug!(
            elapsed = state.elapsed_seconds,
            total = state.total_seconds,
            ?cause,
            "tick"
        );
        if cause == TickCause::Forward && state.direction == Direction::Reverse {
            info!("Timer reached {}s, rewinding", state.total_seconds);
        }
        if !state.is_running() {
            info!("Timer rewound to zero, stopping");
            core.cancel_tx = None;
        }

        self.publish(cause, state);
        Some(state)
    }
}

/// Handle to a single countdown timer
///
/// Cloning the handle shares the same timer.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    shared: Arc<EngineShared>,
}

impl TimerEngine {
    /// Create a stopped timer with the given total
    pub fn new(total_seconds: u64) -> Self {
        let state = TimerState::new(total_seconds);
        let (snapshot_tx, _) = watch::channel(state);
        let (tick_tx, _) = broadcast::channel(TICK_CHANNEL_CAPACITY);

        Self {
            shared: Arc::new(EngineShared {
                core: Mutex::new(EngineCore {
                    state,
                    run_id: 0,
                    cancel_tx: None,
                }),
                snapshot_tx,
                tick_tx,
            }),
        }
    }

    /// Create a stopped timer from minutes and seconds
    pub fn with_duration(minutes: u32, seconds: u32) -> Result<Self, TimerError> {
        duration_input::validate(minutes, seconds)?;
        Ok(Self::new(u64::from(minutes) * 60 + u64::from(seconds)))
    }

    /// Set the total duration and reset elapsed time.
    ///
    /// Only allowed while stopped.
    pub fn configure(&self, minutes: u32, seconds: u32) -> Result<TimerState, TimerError> {
        duration_input::validate(minutes, seconds)?;

        let mut core = self.shared.lock();
        if core.state.is_running() {
            return Err(TimerError::ConfigureWhileRunning);
        }

        core.state.total_seconds = u64::from(minutes) * 60 + u64::from(seconds);
        core.state.elapsed_seconds = 0;
        let state = core.state;
        info!("Timer configured to {}m {}s", minutes, seconds);

        self.shared.publish(TickCause::Configure, state);
        Ok(state)
    }

    /// Start ticking from the current elapsed time.
    ///
    /// Fails with `InvalidState` if already running. A timer with nothing
    /// left to count completes on the spot and ends stopped.
    pub fn start(&self) -> Result<TimerState, TimerError> {
        let mut core = self.shared.lock();
        self.start_locked(&mut core)
    }

    /// Stop ticking, leaving elapsed time untouched.
    ///
    /// Fails with `InvalidState` if not running. A tick racing the cancel is
    /// discarded.
    pub fn cancel(&self) -> Result<TimerState, TimerError> {
        let mut core = self.shared.lock();
        self.cancel_locked(&mut core)
    }

    /// Start when stopped, cancel when running
    pub fn toggle(&self) -> Result<RunState, TimerError> {
        let mut core = self.shared.lock();
        let state = if core.state.is_running() {
            self.cancel_locked(&mut core)?
        } else {
            self.start_locked(&mut core)?
        };
        Ok(state.run_state)
    }

    /// Cancel if running, used on shutdown
    pub fn shutdown(&self) {
        let mut core = self.shared.lock();
        if core.state.is_running() {
            let _ = self.cancel_locked(&mut core);
        }
    }

    /// Current consistent snapshot
    pub fn snapshot(&self) -> TimerState {
        self.shared.lock().state
    }

    /// Watch the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.snapshot_tx.subscribe()
    }

    /// Receive every state change, including each tick
    pub fn subscribe_ticks(&self) -> broadcast::Receiver<TickEvent> {
        self.shared.tick_tx.subscribe()
    }

    fn start_locked(&self, core: &mut EngineCore) -> Result<TimerState, TimerError> {
        if core.state.is_running() {
            return Err(TimerError::InvalidState {
                operation: "start",
                state: RunState::Running,
            });
        }

        let state = &mut core.state;
        state.direction = if state.elapsed_seconds < state.total_seconds {
            Direction::Forward
        } else if state.elapsed_seconds > 0 {
            Direction::Reverse
        } else {
            Direction::Idle
        };

        if state.direction == Direction::Idle {
            info!("Timer has nothing to count, completing immediately");
            state.finish();
            let state = *state;
            self.shared.publish(TickCause::Start, state);
            return Ok(state);
        }

        state.run_state = RunState::Running;
        let state = *state;
        core.run_id += 1;
        let (cancel_tx, cancel_rx) = oneshot::channel();
        core.cancel_tx = Some(cancel_tx);

        info!(
            "Starting timer at {}s of {}s ({:?})",
            state.elapsed_seconds, state.total_seconds, state.direction
        );
        tokio::spawn(tick_loop(Arc::clone(&self.shared), core.run_id, cancel_rx));

        self.shared.publish(TickCause::Start, state);
        Ok(state)
    }

    fn cancel_locked(&self, core: &mut EngineCore) -> Result<TimerState, TimerError> {
        if !core.state.is_running() {
            return Err(TimerError::InvalidState {
                operation: "cancel",
                state: RunState::Stopped,
            });
        }

        core.run_id += 1;
        if let Some(cancel_tx) = core.cancel_tx.take() {
            // The task may already be gone
            let _ = cancel_tx.send(());
        }
        core.state.finish();
        let state = core.state;
        info!("Timer cancelled at {}s", state.elapsed_seconds);

        self.shared.publish(TickCause::Cancel, state);
        Ok(state)
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_resets_elapsed() {
        let engine = TimerEngine::new(0);
        let state = engine.configure(1, 30).unwrap();
        assert_eq!(state.total_seconds, 90);
        assert_eq!(state.elapsed_seconds, 0);
        assert_eq!(engine.snapshot(), state);
    }

    #[test]
    fn configure_rejects_out_of_range() {
        let engine = TimerEngine::new(5);
        let err = engine.configure(10, 0).unwrap_err();
        assert!(err.is_invalid_duration());
        assert_eq!(engine.snapshot().total_seconds, 5);
    }

    #[test]
    fn cancel_while_stopped_is_invalid_state() {
        let engine = TimerEngine::new(5);
        assert_eq!(
            engine.cancel(),
            Err(TimerError::InvalidState {
                operation: "cancel",
                state: RunState::Stopped,
            })
        );
    }

    #[test]
    fn start_with_zero_total_completes_without_a_task() {
        let engine = TimerEngine::new(0);
        let mut ticks = engine.subscribe_ticks();
        let state = engine.start().unwrap();
        assert_eq!(state.run_state, RunState::Stopped);
        assert_eq!(state.direction, Direction::Idle);

        let event = ticks.try_recv().unwrap();
        assert_eq!(event.cause, TickCause::Start);
        assert_eq!(event.run_state, RunState::Stopped);
    }

    #[test]
    fn with_duration_validates() {
        assert!(TimerEngine::with_duration(0, 60).is_err());
        assert_eq!(TimerEngine::with_duration(9, 59).unwrap().snapshot().total_seconds, 599);
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_is_invalid_state() {
        let engine = TimerEngine::new(5);
        engine.start().unwrap();
        assert_eq!(
            engine.start(),
            Err(TimerError::InvalidState {
                operation: "start",
                state: RunState::Running,
            })
        );
        assert_eq!(engine.configure(0, 3), Err(TimerError::ConfigureWhileRunning));
        engine.shutdown();
        assert!(!engine.snapshot().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_racing_cancel_is_discarded() {
        let engine = TimerEngine::new(10);
        engine.start().unwrap();
        let run_id = engine.shared.lock().run_id;
        assert_eq!(engine.shared.advance(run_id).map(|s| s.elapsed_seconds), Some(1));

        engine.cancel().unwrap();
        assert_eq!(engine.shared.advance(run_id), None);
        assert_eq!(engine.snapshot().elapsed_seconds, 1);
        assert_eq!(engine.shared.current_direction(run_id), None);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_alternates() {
        let engine = TimerEngine::new(5);
        assert_eq!(engine.toggle(), Ok(RunState::Running));
        assert_eq!(engine.toggle(), Ok(RunState::Stopped));
        assert_eq!(engine.toggle(), Ok(RunState::Running));
        engine.shutdown();
    }
}
