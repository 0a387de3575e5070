//! Configuration loading and validation.
//!
//! Loads `verdict.toml` with per-section defaults. All sections use
//! `#[serde(default)]` so a minimal or empty config file is valid, and a
//! missing file at the default location means "all defaults".

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::poller::scheduler::DEFAULT_RETRY_PERIOD_SECS;
use crate::practicum::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "verdict.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Status API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Poll loop timing.
    #[serde(default)]
    pub poll: PollConfig,

    /// Telegram delivery settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Log file placement.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Status API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Homework status endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Poll loop timing.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Pause between cycles in seconds; also the retry period after a failure.
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            retry_period_secs: default_retry_period_secs(),
        }
    }
}

/// Telegram delivery settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    /// Bot API server URL; the public Telegram server when unset.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Log file placement.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directory holding the log file.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,

    /// Log file name inside `dir`.
    #[serde(default = "default_log_file")]
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file_name: default_log_file(),
        }
    }
}

// Default value functions for serde

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_retry_period_secs() -> u64 {
    DEFAULT_RETRY_PERIOD_SECS
}
fn default_log_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_log_file() -> String {
    "program.log".to_owned()
}

impl Config {
    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> anyhow::Result<()> {
        let endpoint = self.endpoint_url()?;
        anyhow::ensure!(
            matches!(endpoint.scheme(), "http" | "https"),
            "api.endpoint must use http or https"
        );
        anyhow::ensure!(self.api.timeout_secs >= 1, "api.timeout_secs must be >= 1");
        anyhow::ensure!(
            self.poll.retry_period_secs >= 1,
            "poll.retry_period_secs must be >= 1"
        );
        self.telegram_api_url()?;
        anyhow::ensure!(
            !self.logging.file_name.trim().is_empty(),
            "logging.file_name must not be empty"
        );
        Ok(())
    }

    /// Parsed status endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `api.endpoint` is not a valid URL.
    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.api.endpoint)
            .with_context(|| format!("invalid api.endpoint '{}'", self.api.endpoint))
    }

    /// Parsed Bot API server URL, if overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if `telegram.api_url` is set but not a valid URL.
    pub fn telegram_api_url(&self) -> anyhow::Result<Option<Url>> {
        self.telegram
            .api_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).with_context(|| format!("invalid telegram.api_url '{raw}'"))
            })
            .transpose()
    }

    /// HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Pause between cycles.
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.poll.retry_period_secs)
    }
}

/// Load and validate the config from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Resolve the config for the CLI.
///
/// An explicit path must exist. Without one, `verdict.toml` in the working
/// directory is used when present, otherwise defaults apply.
///
/// # Errors
///
/// Returns an error if a config file exists but is invalid, or an explicit
/// path cannot be read.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        load_config(default_path)
    } else {
        Ok(Config::default())
    }
}
