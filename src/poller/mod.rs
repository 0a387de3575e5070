//! Poll-check-notify cycle.
//!
//! [`Poller`] owns the watermark and the last sent message. Each
//! [`Poller::tick`] is one cycle; [`scheduler::run_every`] repeats it on a
//! fixed period. Failures inside a cycle are logged and never escape it.

pub mod scheduler;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::homework::{self, HomeworkError};
use crate::practicum::{ApiError, StatusApi};
use crate::telegram::{Messenger, Notifier};

pub use scheduler::{run_every, Tick};

/// Mutable state carried between cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Unix seconds passed to the API as `from_date`.
    pub timestamp: i64,
    /// Most recently sent notification text.
    pub last_message: Option<String>,
}

/// Anything that can abort a cycle.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    /// Fetching the response failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The response or work item was malformed.
    #[error(transparent)]
    Homework(#[from] HomeworkError),
}

/// Result of one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API reported no changed submissions.
    Empty,
    /// The newest status matches the last notification.
    Unchanged,
    /// A new status was sent to the chat.
    Notified(String),
    /// The cycle failed; the message describes why.
    Failed(String),
}

/// Drives the status API and notifier, suppressing duplicate messages.
pub struct Poller<A, M> {
    api: A,
    notifier: Notifier<M>,
    state: PollState,
}

impl<A: StatusApi, M: Messenger> Poller<A, M> {
    /// Create a poller with a fresh [`PollState`].
    pub fn new(api: A, notifier: Notifier<M>) -> Self {
        Self::with_state(api, notifier, PollState::default())
    }

    /// Create a poller resuming from `state`.
    pub fn with_state(api: A, notifier: Notifier<M>, state: PollState) -> Self {
        Self {
            api,
            notifier,
            state,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Status API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Notifier used for delivery.
    pub fn notifier(&self) -> &Notifier<M> {
        &self.notifier
    }

    /// Run one cycle at unix time `now`.
    ///
    /// On success the watermark advances to `now` (never backwards). On
    /// failure the state is left untouched and the error is logged.
    pub async fn tick(&mut self, now: i64) -> CycleOutcome {
        match self.check_once().await {
            Ok(outcome) => {
                self.state.timestamp = self.state.timestamp.max(now);
                outcome
            }
            Err(e) => {
                error!(error = %e, "polling cycle failed");
                CycleOutcome::Failed(e.to_string())
            }
        }
    }

    async fn check_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let response = self.api.fetch_status(self.state.timestamp).await?;
        let homeworks = homework::check_response(&response)?;

        // Newest first; later entries are ignored for this cycle.
        let Some(latest) = homeworks.first() else {
            debug!("received an empty homework list");
            return Ok(CycleOutcome::Empty);
        };

        let message = homework::parse_status(latest)?;
        if self.state.last_message.as_deref() == Some(message.as_str()) {
            debug!("homework status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        info!(message = %message, "homework status changed");
        self.notifier.notify(&message).await;
        self.state.last_message = Some(message.clone());
        Ok(CycleOutcome::Notified(message))
    }
}

#[async_trait]
impl<A: StatusApi, M: Messenger> Tick for Poller<A, M> {
    async fn on_tick(&mut self, now: i64) {
        let outcome = self.tick(now).await;
        debug!(outcome = ?outcome, watermark = self.state.timestamp, "cycle complete");
    }
}
