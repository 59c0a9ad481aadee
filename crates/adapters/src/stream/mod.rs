// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server-push event stream adapters

mod http;

pub use self::http::HttpStreamAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStreamAdapter, StreamCall};

use crate::error::TransportError;
use async_trait::async_trait;
use futures_util::stream::BoxStream;

/// Raw `data` payloads in delivery order
///
/// The stream ends when the server closes the connection. Dropping it
/// closes the connection.
pub type PayloadStream = BoxStream<'static, Result<String, TransportError>>;

/// Adapter for the per-job event stream
#[async_trait]
pub trait StreamAdapter: Clone + Send + Sync + 'static {
    /// Open the event stream for a job
    async fn connect(&self, job_id: &str) -> Result<PayloadStream, TransportError>;
}
