// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw - jobwatch CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{status, watch};
use jw_core::config::parse_duration;
use jw_core::TrackerConfig;
use output::OutputFormat;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jw",
    version,
    about = "jobwatch - Track long-running server-side jobs"
)]
struct Cli {
    /// Base URL of the job API [env: JW_API_URL]
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token sent with every request [env: JW_AUTH_TOKEN]
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Give up after this long, e.g. 300000 or 5m [env: JW_TIMEOUT_MS]
    #[arg(long, global = true, value_name = "DURATION", value_parser = parse_duration)]
    timeout: Option<Duration>,

    /// Delay between status checks when the event stream is unavailable [env: JW_POLL_INTERVAL_MS]
    #[arg(long, global = true, value_name = "DURATION", value_parser = parse_duration)]
    poll_interval: Option<Duration>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track a job until it finishes, fails, or times out
    Watch(watch::WatchArgs),
    /// Fetch a job's current status once
    Status(status::StatusArgs),
}

impl Cli {
    /// Defaults, then the environment, then flags
    fn tracker_config(&self) -> Result<TrackerConfig> {
        let mut config = TrackerConfig::from_env();
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.auth_token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(interval) = self.poll_interval {
            config.poll_interval = interval;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.tracker_config()?;

    match cli.command {
        Commands::Watch(args) => watch::handle(args, config, cli.output).await,
        Commands::Status(args) => {
            status::handle(args, config, cli.output).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
