// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job state store
//!
//! [`JobState`] is the single source of truth for the tracked job. Its
//! mutators are the only way to change `status`, and each one checks its
//! precondition with `debug_assert!`: a violation is a tracker bug that
//! should fail tests, while release builds leave the state untouched.

use crate::status::{FailureKind, JobStatus};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Message shown right after a job starts
pub const STARTING_MESSAGE: &str = "Starting...";

/// State of the tracked job
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobState {
    status: JobStatus,
    job_id: Option<String>,
    progress: u8,
    message: String,
    result: Option<Value>,
    error: Option<String>,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

/// Read-only copy of the job state handed to observers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobSnapshot {
    pub status: JobStatus,
    /// True while the job is running
    pub processing: bool,
    pub job_id: Option<String>,
    pub progress: u8,
    pub message: String,
    pub result: Option<Value>,
    pub error: Option<String>,
    #[serde(skip)]
    pub started_at: Option<Instant>,
    #[serde(skip)]
    pub finished_at: Option<Instant>,
}

impl JobState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    /// True when every field holds its idle default
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    /// Start tracking `job_id`. Requires idle or terminal status.
    pub fn begin(&mut self, job_id: impl Into<String>, now: Instant) {
        debug_assert!(
            !self.status.is_running(),
            "begin requires an idle or terminal job, status is {}",
            self.status
        );
        if self.status.is_running() {
            return;
        }

        *self = JobState {
            status: JobStatus::Running,
            job_id: Some(job_id.into()),
            progress: 0,
            message: STARTING_MESSAGE.to_string(),
            result: None,
            error: None,
            started_at: Some(now),
            finished_at: None,
        };
    }

    /// Overwrite progress and/or message. Requires running status.
    pub fn apply_progress(&mut self, progress: Option<u8>, message: Option<&str>) {
        if !self.expect_running("apply_progress") {
            return;
        }
        if let Some(progress) = progress {
            self.progress = progress;
        }
        if let Some(message) = message {
            self.message = message.to_string();
        }
    }

    /// Mark the job completed. Requires running status.
    pub fn apply_success(&mut self, result: Value, now: Instant) {
        if !self.expect_running("apply_success") {
            return;
        }
        self.status = JobStatus::Completed;
        self.progress = 100;
        self.result = Some(result);
        self.finished_at = Some(now);
    }

    /// Move the job into the terminal status for `kind`. Requires running status.
    pub fn apply_failure(&mut self, kind: FailureKind, error: impl Into<String>, now: Instant) {
        if !self.expect_running("apply_failure") {
            return;
        }
        self.status = kind.status();
        self.error = Some(error.into());
        self.finished_at = Some(now);
    }

    /// Reset every field to its idle default
    pub fn clear(&mut self) {
        *self = JobState::default();
    }

    pub fn snapshot(&self) -> JobSnapshot {
        JobSnapshot {
            status: self.status,
            processing: self.status.is_running(),
            job_id: self.job_id.clone(),
            progress: self.progress,
            message: self.message.clone(),
            result: self.result.clone(),
            error: self.error.clone(),
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }

    fn expect_running(&self, op: &str) -> bool {
        debug_assert!(
            self.status.is_running(),
            "{} requires a running job, status is {}",
            op,
            self.status
        );
        self.status.is_running()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
