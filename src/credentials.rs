//! Credential loading from the process environment and an optional `.env`.

use tracing::debug;

/// Variable holding the Practicum API token.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";

/// Variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";

/// Variable holding the destination chat identifier.
pub const CHAT_ID: &str = "CHAT_ID";

/// Every required variable, in the order they are reported.
pub const REQUIRED: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, CHAT_ID];

/// Errors raised while loading credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    /// One or more required variables are unset or empty.
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Secrets needed to poll the API and deliver notifications.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Practicum API token sent as `Authorization: OAuth`.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Destination chat id or channel username.
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"[REDACTED]")
            .field("telegram_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Credentials {
    /// Build credentials from a key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Missing`] naming every absent or blank
    /// variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = missing_credentials(&lookup);
        if !missing.is_empty() {
            return Err(CredentialsError::Missing(missing));
        }

        let require = |key: &str| lookup(key).unwrap_or_default();
        Ok(Self {
            practicum_token: require(PRACTICUM_TOKEN),
            telegram_token: require(TELEGRAM_TOKEN),
            chat_id: require(CHAT_ID),
        })
    }

    /// Load credentials from the environment, reading `./.env` first if it
    /// exists. Variables already set in the environment take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Missing`] when any variable is absent.
    pub fn from_env() -> Result<Self, CredentialsError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(e) => debug!(error = %e, "no .env file loaded"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Names of required variables that are unset or blank.
///
/// An empty list means every credential is present.
pub fn missing_credentials<F>(lookup: &F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED
        .into_iter()
        .filter(|key| lookup(*key).is_none_or(|value| value.trim().is_empty()))
        .collect()
}
