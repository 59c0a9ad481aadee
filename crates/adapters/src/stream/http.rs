// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event stream over HTTP server-sent events

use super::{PayloadStream, StreamAdapter};
use crate::error::TransportError;
use crate::http::{ApiClient, Endpoint};
use async_trait::async_trait;
use eventsource_stream::{EventStreamError, Eventsource};
use futures_util::StreamExt;

/// Reads the job's `events` endpoint as `text/event-stream`
///
/// Comment lines and events without data are keep-alives and are skipped.
/// Frames that cannot be decoded are logged and skipped; only a failed
/// read of the response body ends the stream with an error. The adapter
/// never reconnects on its own.
#[derive(Clone)]
pub struct HttpStreamAdapter {
    api: ApiClient,
}

impl HttpStreamAdapter {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StreamAdapter for HttpStreamAdapter {
    async fn connect(&self, job_id: &str) -> Result<PayloadStream, TransportError> {
        let response = self
            .api
            .get(job_id, Endpoint::Events, "text/event-stream")
            .await?;

        let payloads = response
            .bytes_stream()
            .eventsource()
            .filter_map(|event| async move {
                match event {
                    Ok(event) if event.data.trim().is_empty() => None,
                    Ok(event) => Some(Ok(event.data)),
                    Err(EventStreamError::Transport(e)) => {
                        Some(Err(TransportError::Body(e.to_string())))
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "dropping undecodable event");
                        None
                    }
                }
            });

        Ok(payloads.boxed())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
