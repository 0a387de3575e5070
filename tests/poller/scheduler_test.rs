//! Tests for `src/poller/scheduler.rs`.

use std::time::Duration;

use async_trait::async_trait;
use verdict::poller::{run_every, Tick};

#[derive(Default)]
struct CountingTask {
    ticks: Vec<i64>,
}

#[async_trait]
impl Tick for CountingTask {
    async fn on_tick(&mut self, now: i64) {
        self.ticks.push(now);
    }
}

#[tokio::test(start_paused = true)]
async fn runs_immediately_then_once_per_period() {
    let mut task = CountingTask::default();

    let result = tokio::time::timeout(
        Duration::from_secs(1_250),
        run_every(&mut task, Duration::from_secs(600)),
    )
    .await;

    assert!(result.is_err(), "scheduler should never finish on its own");
    // Ticks at 0s, 600s and 1200s of virtual time.
    assert_eq!(task.ticks.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn passes_current_unix_time() {
    let mut task = CountingTask::default();
    let before = verdict::poller::scheduler::unix_now();

    let _ = tokio::time::timeout(
        Duration::from_secs(1),
        run_every(&mut task, Duration::from_secs(600)),
    )
    .await;

    assert_eq!(task.ticks.len(), 1);
    assert!(task.ticks[0] >= before);
}
