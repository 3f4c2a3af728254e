//! Label tracker CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Resolve configuration** from flags, action inputs and CI fallbacks
//!    before any network access.
//! 2. **Wire observability**: `tracing-subscriber` on stderr, plus an
//!    OpenTelemetry OTLP exporter when one is configured.
//! 3. **Construct infrastructure**: a [`github::GithubClient`] injected into
//!    [`sync::TrackerSync`].
//! 4. **Report the outcome**: a notice naming the created or updated issue, or
//!    a single failure message and a non-zero exit code.

mod actions;
mod config;
mod observability;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use github::GithubClient;
use sync::TrackerSync;
use tracing::debug;
use tracker::{SyncOutcome, SyncRunId, Timestamp, TrackerError};

use crate::config::CliArgs;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let telemetry = match config::log_format(&args)
        .map_err(anyhow::Error::from)
        .and_then(observability::init)
    {
        Ok(telemetry) => telemetry,
        Err(e) => {
            actions::fail(&format!("An error occurred: {e:#}"));
            return ExitCode::FAILURE;
        }
    };

    let code = match run(&args, SyncRunId::new_random()).await {
        Ok(outcome) => {
            actions::notice(&outcome.to_string());
            ExitCode::SUCCESS
        }
        Err(e) => {
            actions::fail(&format!("An error occurred: {e:#}"));
            ExitCode::FAILURE
        }
    };

    telemetry.shutdown();
    code
}

async fn run(args: &CliArgs, run_id: SyncRunId) -> anyhow::Result<SyncOutcome> {
    let config =
        config::resolve(args, |name| std::env::var(name).ok()).map_err(TrackerError::from)?;
    debug!(
        repository = %config.sync.repository,
        api_url = %config.github.api_url,
        authenticated = config.github.token.is_some(),
        "Configuration resolved"
    );

    let client = GithubClient::new(config.github).context("failed to build GitHub client")?;
    let tracker_sync = TrackerSync::new(Arc::new(client), config.sync);

    Ok(tracker_sync.run(run_id, Timestamp::now()).await?)
}
