//! Practicum homework status API client.
//!
//! One authenticated GET per call, bounded by a request timeout. Retrying is
//! left to the poll loop cadence.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors returned by the status API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API could not be reached or answered with a non-200 status.
    #[error("status API unavailable: {0}")]
    Unavailable(String),
    /// The API answered 200 but the body is not valid JSON.
    #[error("failed to decode status API response: {0}")]
    Decode(String),
}

/// Source of homework status responses.
///
/// Implementations must be `Send + Sync` so the poller can be driven from
/// a Tokio task.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch statuses changed since `watermark` (unix seconds).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unavailable`] on transport failure or a non-200
    /// status, and [`ApiError::Decode`] when the body is not JSON.
    async fn fetch_status(&self, watermark: i64) -> Result<Value, ApiError>;
}

/// HTTP client for the Practicum status endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    endpoint: Url,
    token: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl PracticumClient {
    /// Create a client for `endpoint` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url, token: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint,
            token,
            client,
        })
    }

    /// Endpoint this client queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn fetch_status(&self, watermark: i64) -> Result<Value, ApiError> {
        debug!(endpoint = %self.endpoint, from_date = watermark, "requesting homework statuses");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", watermark)])
            .send()
            .await
            .map_err(|e| ApiError::Unavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Unavailable(format!(
                "unexpected HTTP status {}",
                status.as_u16()
            )));
        }
        info!("status API answered");

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unavailable(format!("failed to read response body: {e}")))?;
        let value = serde_json::from_str::<Value>(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("homework data received");
        Ok(value)
    }
}
