use arc_timer::{
    state::{Direction, RunState, TickCause},
    TimerEngine,
};
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Counts forward and reverse ticks until the engine reports stopped.
async fn run_to_completion(engine: &TimerEngine) -> (u64, u64, Option<(u64, Duration)>) {
    let mut ticks = engine.subscribe_ticks();
    let started = Instant::now();
    engine.start().unwrap();

    let mut forward = 0;
    let mut reverse = 0;
    let mut flipped = None;
    loop {
        let event = ticks.recv().await.unwrap();
        match event.cause {
            TickCause::Forward => {
                forward += 1;
                if event.direction == Direction::Reverse {
                    flipped = Some((event.elapsed_seconds, started.elapsed()));
                }
            }
            TickCause::Reverse => reverse += 1,
            _ => {}
        }
        if event.run_state == RunState::Stopped {
            break;
        }
    }
    (forward, reverse, flipped)
}

/// Twenty forward ticks at 1s, then twenty rewind ticks at 100ms.
#[tokio::test(start_paused = true)]
async fn twenty_second_timer_rewinds_to_zero() {
    let engine = TimerEngine::with_duration(0, 20).unwrap();
    let started = Instant::now();

    let (forward, reverse, flipped) = run_to_completion(&engine).await;

    assert_eq!(forward, 20);
    assert_eq!(reverse, 20);

    let (flip_elapsed, flip_at) = flipped.expect("direction flipped");
    assert_eq!(flip_elapsed, 20);
    assert!(flip_at >= Duration::from_secs(20) && flip_at < Duration::from_millis(20_050));

    let total = started.elapsed();
    assert!(total >= Duration::from_secs(22) && total < Duration::from_millis(22_050));

    let state = engine.snapshot();
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(state.run_state, RunState::Stopped);
    assert_eq!(state.direction, Direction::Idle);
}

/// Forward tick count equals the total for several totals.
#[tokio::test(start_paused = true)]
async fn forward_ticks_match_total() {
    for total in [1u32, 3, 7, 59] {
        let engine = TimerEngine::with_duration(0, total).unwrap();
        let (forward, reverse, _) = run_to_completion(&engine).await;
        assert_eq!(forward, u64::from(total));
        assert_eq!(reverse, u64::from(total));
        assert_eq!(engine.snapshot().elapsed_seconds, 0);
    }
}

#[tokio::test(start_paused = true)]
async fn cancel_keeps_elapsed_time() {
    let engine = TimerEngine::with_duration(0, 20).unwrap();
    engine.start().unwrap();

    sleep(Duration::from_millis(3_500)).await;
    let state = engine.cancel().unwrap();
    assert_eq!(state.elapsed_seconds, 3);
    assert_eq!(state.run_state, RunState::Stopped);
    assert_eq!(state.direction, Direction::Idle);

    // No tick lands after the cancel
    sleep(Duration::from_secs(5)).await;
    assert_eq!(engine.snapshot().elapsed_seconds, 3);
}

#[tokio::test(start_paused = true)]
async fn restart_resumes_from_retained_elapsed() {
    let engine = TimerEngine::with_duration(0, 20).unwrap();
    engine.start().unwrap();
    sleep(Duration::from_millis(2_500)).await;
    engine.cancel().unwrap();

    let state = engine.start().unwrap();
    assert_eq!(state.elapsed_seconds, 2);
    assert_eq!(state.direction, Direction::Forward);

    sleep(Duration::from_millis(1_500)).await;
    assert_eq!(engine.snapshot().elapsed_seconds, 3);
    engine.shutdown();
}

#[tokio::test(start_paused = true)]
async fn cancel_during_rewind() {
    let engine = TimerEngine::with_duration(0, 5).unwrap();
    engine.start().unwrap();

    sleep(Duration::from_millis(5_250)).await;
    let during = engine.snapshot();
    assert_eq!(during.direction, Direction::Reverse);
    assert_eq!(during.elapsed_seconds, 3);

    let state = engine.cancel().unwrap();
    assert_eq!(state.elapsed_seconds, 3);
    sleep(Duration::from_secs(1)).await;
    assert_eq!(engine.snapshot().elapsed_seconds, 3);
}

#[tokio::test(start_paused = true)]
async fn configure_after_cancel_resets() {
    let engine = TimerEngine::with_duration(0, 20).unwrap();
    engine.start().unwrap();
    sleep(Duration::from_millis(4_500)).await;
    engine.cancel().unwrap();

    let state = engine.configure(1, 0).unwrap();
    assert_eq!(state.total_seconds, 60);
    assert_eq!(state.elapsed_seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn watchers_see_each_tick_before_the_next() {
    let engine = TimerEngine::with_duration(0, 3).unwrap();
    let mut watcher = engine.subscribe();
    engine.start().unwrap();

    let mut seen = Vec::new();
    while watcher.changed().await.is_ok() {
        let state = *watcher.borrow_and_update();
        seen.push(state.elapsed_seconds);
        if !state.is_running() {
            break;
        }
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 2, 1, 0]);
}
