// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job status values

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle status of a tracked job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Nothing is being tracked
    #[default]
    Idle,
    /// A job is being tracked and has not reached a terminal state
    Running,
    /// The server reported completion
    Completed,
    /// The server reported failure, or status checks failed
    Failed,
    /// The user cancelled tracking
    Cancelled,
    /// The overall deadline passed before a terminal update arrived
    TimedOut,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Idle => "idle",
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Cancelled => "cancelled",
            JobStatus::TimedOut => "timed_out",
        }
    }

    /// Check if status is terminal (no further transitions without a reset)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Cancelled | JobStatus::TimedOut
        )
    }

    pub fn is_running(&self) -> bool {
        matches!(self, JobStatus::Running)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The terminal status a failure moves the job into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Failed,
    Cancelled,
    TimedOut,
}

impl FailureKind {
    pub fn status(self) -> JobStatus {
        match self {
            FailureKind::Failed => JobStatus::Failed,
            FailureKind::Cancelled => JobStatus::Cancelled,
            FailureKind::TimedOut => JobStatus::TimedOut,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status().as_str())
    }
}
