// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use jw_core::{JobSnapshot, StatusUpdate};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// One line of live progress, e.g. `[ 45%] Transcribing audio`
pub fn progress_line(snapshot: &JobSnapshot) -> String {
    format!("[{:>3}%] {}", snapshot.progress, snapshot.message)
}

/// Final state of a watched job
#[derive(Serialize)]
#[serde(transparent)]
pub struct JobReport(pub JobSnapshot);

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = &self.0;
        let job_id = job.job_id.as_deref().unwrap_or("-");
        match &job.error {
            Some(error) => write!(f, "{} {}: {}", job_id, job.status, error)?,
            None => write!(f, "{} {}: {}", job_id, job.status, job.message)?,
        }
        if let (Some(started), Some(finished)) = (job.started_at, job.finished_at) {
            let elapsed = finished.saturating_duration_since(started);
            write!(f, " (after {})", humantime::format_duration(whole_millis(elapsed)))?;
        }
        Ok(())
    }
}

/// A single status response, as sent by the server
#[derive(Serialize)]
pub struct StatusReport {
    #[serde(skip)]
    pub job_id: String,
    #[serde(flatten)]
    pub update: StatusUpdate,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let update = &self.update;
        write!(
            f,
            "{}: {}",
            self.job_id,
            update.status.as_deref().unwrap_or("unknown")
        )?;
        if let Some(progress) = update.progress_percent() {
            write!(f, " {}%", progress)?;
        }
        if let Some(message) = &update.message {
            write!(f, " - {}", message)?;
        }
        if let Some(error) = &update.error {
            write!(f, "\n  Error: {}", error)?;
        }
        Ok(())
    }
}

fn whole_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
