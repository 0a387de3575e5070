//! Fixed-period scheduling for polling cycles.
//!
//! The period doubles as the retry delay: a failed cycle is simply tried
//! again on the next tick, with no backoff.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

/// Default pause between cycles in seconds.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Work executed once per scheduler tick.
#[async_trait]
pub trait Tick: Send {
    /// Run one unit of work at unix time `now`.
    async fn on_tick(&mut self, now: i64);
}

/// Current unix time in seconds.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Run `task` immediately, then again `period` after each run completes.
///
/// Never returns; the process ends by external termination.
pub async fn run_every<T: Tick>(task: &mut T, period: Duration) {
    info!(period_secs = period.as_secs(), "polling started");

    loop {
        task.on_tick(unix_now()).await;
        tokio::time::sleep(period).await;
    }
}
