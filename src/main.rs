//! Verdict CLI entry point.
//!
//! Provides `start` (the default) for running the polling daemon and `check`
//! for a single polling cycle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use verdict::config::{resolve_config, Config};
use verdict::credentials::{Credentials, CredentialsError};
use verdict::poller::{run_every, scheduler, CycleOutcome, Poller};
use verdict::practicum::PracticumClient;
use verdict::telegram::{Notifier, TelegramMessenger};

/// Verdict — homework review status watcher.
#[derive(Parser)]
#[command(name = "verdict", version, about)]
struct Cli {
    /// Path to a TOML config file (default: ./verdict.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute (default: start).
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Poll the status API forever and notify on changes.
    Start,
    /// Run a single polling cycle and exit.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Start) {
        Command::Start => handle_start(config).await,
        Command::Check => handle_check(config).await,
    }
}

/// Run the polling daemon.
async fn handle_start(config: Config) -> anyhow::Result<()> {
    let _logging_guard =
        verdict::logging::init_production(&config.logging.dir, &config.logging.file_name)?;

    let credentials = load_credentials()?;
    let mut poller = build_poller(&config, &credentials)?;

    info!(
        endpoint = %config.api.endpoint,
        retry_period_secs = config.poll.retry_period_secs,
        "verdict started"
    );

    run_every(&mut poller, config.retry_period()).await;
    Ok(())
}

/// Run one cycle and report its outcome.
async fn handle_check(config: Config) -> anyhow::Result<()> {
    verdict::logging::init_cli();

    let credentials = load_credentials()?;
    let mut poller = build_poller(&config, &credentials)?;

    match poller.tick(scheduler::unix_now()).await {
        CycleOutcome::Empty => info!("no homework updates"),
        CycleOutcome::Unchanged => info!("homework status unchanged"),
        CycleOutcome::Notified(message) => info!(message = %message, "notification sent"),
        CycleOutcome::Failed(reason) => anyhow::bail!("polling cycle failed: {reason}"),
    }

    Ok(())
}

/// Read credentials, logging a fatal event when any are missing.
fn load_credentials() -> anyhow::Result<Credentials> {
    Credentials::from_env().map_err(|e| {
        let CredentialsError::Missing(ref names) = e;
        error!(
            fatal = true,
            missing = %names.join(", "),
            "required environment variables are missing, exiting"
        );
        anyhow::Error::new(e)
    })
}

fn build_poller(
    config: &Config,
    credentials: &Credentials,
) -> anyhow::Result<Poller<PracticumClient, TelegramMessenger>> {
    let api = PracticumClient::new(
        config.endpoint_url()?,
        credentials.practicum_token.clone(),
        config.timeout(),
    )
    .context("failed to build HTTP client")?;

    let messenger = match config.telegram_api_url()? {
        Some(api_url) => TelegramMessenger::with_api_url(&credentials.telegram_token, api_url),
        None => TelegramMessenger::new(&credentials.telegram_token),
    };
    let notifier = Notifier::new(messenger, &credentials.chat_id);

    Ok(Poller::new(api, notifier))
}
