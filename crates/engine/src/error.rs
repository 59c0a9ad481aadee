// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for job tracking

use jw_core::FailureKind;
use thiserror::Error;

/// Why a tracked job did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The server reported failure, or status checks failed
    #[error("{0}")]
    Failed(String),
    #[error("{0}")]
    TimedOut(String),
    #[error("{0}")]
    Cancelled(String),
    /// Tracking was reset while the job was still running
    #[error("tracking of job {0} was reset before it finished")]
    Abandoned(String),
    /// A job is already being tracked; reset first
    #[error("already tracking job {0}")]
    AlreadyRunning(String),
}

impl TrackError {
    pub fn from_failure(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            FailureKind::Failed => TrackError::Failed(message),
            FailureKind::TimedOut => TrackError::TimedOut(message),
            FailureKind::Cancelled => TrackError::Cancelled(message),
        }
    }
}
