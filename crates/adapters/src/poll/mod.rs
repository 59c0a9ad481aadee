// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status endpoint adapters

mod http;

pub use self::http::HttpPollAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePollAdapter, PollCall};

use crate::error::TransportError;
use async_trait::async_trait;

/// Adapter for one-shot job status requests
#[async_trait]
pub trait PollAdapter: Clone + Send + Sync + 'static {
    /// Fetch the raw status payload for a job
    async fn fetch_status(&self, job_id: &str) -> Result<String, TransportError>;
}
