// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track a job to completion

use crate::output::{self, JobReport, OutputFormat};
use anyhow::Result;
use clap::Args;
use jw_adapters::{
    ApiClient, HttpPollAdapter, HttpStreamAdapter, TracedPollAdapter, TracedStreamAdapter,
};
use jw_core::{JobSnapshot, TrackerConfig};
use jw_engine::{Orchestrator, TrackError};
use std::process::ExitCode;
use tokio::sync::watch;

/// Exit status when the server reports failure or status checks fail
const EXIT_FAILED: u8 = 1;
const EXIT_TIMED_OUT: u8 = 2;
/// Conventional status for a run interrupted by SIGINT
const EXIT_CANCELLED: u8 = 130;

#[derive(Args)]
pub struct WatchArgs {
    /// Job to track
    pub job_id: String,

    /// Only print the final result
    #[arg(short, long)]
    pub quiet: bool,
}

pub async fn handle(args: WatchArgs, config: TrackerConfig, format: OutputFormat) -> Result<ExitCode> {
    let api = ApiClient::new(&config)?;
    let stream = TracedStreamAdapter::new(HttpStreamAdapter::new(api.clone()));
    let poll = TracedPollAdapter::new(HttpPollAdapter::new(api));

    let orchestrator = Orchestrator::builder(stream, poll)
        .config(config)
        .on_complete(|job_id| tracing::debug!(%job_id, "on_complete"))
        .on_error(|message| tracing::debug!(%message, "on_error"))
        .build()?;
    tracing::debug!(config = %orchestrator.config(), "tracking job {}", args.job_id);

    // Ctrl-C cancels tracking; `start` then resolves with the cancellation
    let handler = orchestrator.clone();
    ctrlc::set_handler(move || handler.cancel())?;

    let renderer = (format == OutputFormat::Text && !args.quiet)
        .then(|| tokio::spawn(render(orchestrator.subscribe())));

    let outcome = orchestrator.start(args.job_id).await;

    if let Some(renderer) = renderer {
        renderer.abort();
    }
    output::print(&JobReport(orchestrator.snapshot()), format);

    Ok(match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    })
}

/// Print a progress line whenever it changes
async fn render(mut snapshots: watch::Receiver<JobSnapshot>) {
    let mut last = None;
    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        if !snapshot.processing {
            continue;
        }
        let line = output::progress_line(&snapshot);
        if last.as_ref() != Some(&line) {
            println!("{}", line);
            last = Some(line);
        }
    }
}

fn exit_code(error: &TrackError) -> u8 {
    match error {
        TrackError::TimedOut(_) => EXIT_TIMED_OUT,
        TrackError::Cancelled(_) => EXIT_CANCELLED,
        TrackError::Failed(_) | TrackError::Abandoned(_) | TrackError::AlreadyRunning(_) => {
            EXIT_FAILED
        }
    }
}
