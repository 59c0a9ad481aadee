// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::error::TransportError;
use crate::poll::PollAdapter;
use crate::stream::{PayloadStream, StreamAdapter};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any StreamAdapter
#[derive(Clone)]
pub struct TracedStreamAdapter<S> {
    inner: S,
}

impl<S> TracedStreamAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: StreamAdapter> StreamAdapter for TracedStreamAdapter<S> {
    async fn connect(&self, job_id: &str) -> Result<PayloadStream, TransportError> {
        let span = tracing::info_span!("stream.connect", job_id);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.connect(job_id).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "connected"),
                // Expected when the server has no stream; polling takes over
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "connect failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any PollAdapter
#[derive(Clone)]
pub struct TracedPollAdapter<P> {
    inner: P,
}

impl<P> TracedPollAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: PollAdapter> PollAdapter for TracedPollAdapter<P> {
    async fn fetch_status(&self, job_id: &str) -> Result<String, TransportError> {
        let span = tracing::info_span!("poll.fetch", job_id);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.fetch_status(job_id).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(body) => tracing::debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    body_len = body.len(),
                    "fetched"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "fetch failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
