// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot status request

use crate::output::{self, OutputFormat, StatusReport};
use anyhow::{Context, Result};
use clap::Args;
use jw_adapters::{ApiClient, HttpPollAdapter, PollAdapter, TracedPollAdapter};
use jw_core::{StatusUpdate, TrackerConfig};

#[derive(Args)]
pub struct StatusArgs {
    /// Job to query
    pub job_id: String,
}

pub async fn handle(args: StatusArgs, config: TrackerConfig, format: OutputFormat) -> Result<()> {
    tracing::debug!(%config, "fetching status of job {}", args.job_id);
    let api = ApiClient::new(&config)?;
    let poll = TracedPollAdapter::new(HttpPollAdapter::new(api));

    let body = poll
        .fetch_status(&args.job_id)
        .await
        .with_context(|| format!("failed to get status of job {}", args.job_id))?;
    let update = StatusUpdate::decode(&body)?;

    output::print(
        &StatusReport {
            job_id: args.job_id,
            update,
        },
        format,
    );
    Ok(())
}
