// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport reader tasks
//!
//! Each open transport is one tokio task that decodes payloads and feeds
//! them to a [`Sink`] tagged with the token the transport was opened under.
//! Closing a transport aborts its task.

use futures_util::StreamExt;
use jw_adapters::{PollAdapter, StreamAdapter, TransportError};
use jw_core::{SessionToken, StatusUpdate, TrackerEvent, TransportKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Receives transport events; returns false once the transport is no
/// longer wanted and the task should stop
pub(crate) type Sink = Arc<dyn Fn(TrackerEvent) -> bool + Send + Sync>;

/// A running transport task. Dropping the handle closes the transport.
#[derive(Debug)]
pub(crate) struct TransportHandle {
    pub kind: TransportKind,
    pub token: SessionToken,
    task: JoinHandle<()>,
}

impl TransportHandle {
    pub fn spawn_stream<S: StreamAdapter>(
        adapter: S,
        job_id: String,
        token: SessionToken,
        sink: Sink,
    ) -> Self {
        Self {
            kind: TransportKind::Stream,
            token,
            task: tokio::spawn(run_stream(adapter, job_id, token, sink)),
        }
    }

    pub fn spawn_poll<P: PollAdapter>(
        adapter: P,
        job_id: String,
        token: SessionToken,
        interval: Duration,
        sink: Sink,
    ) -> Self {
        Self {
            kind: TransportKind::Poll,
            token,
            task: tokio::spawn(run_poll(adapter, job_id, token, interval, sink)),
        }
    }
}

impl Drop for TransportHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub(crate) async fn run_stream<S: StreamAdapter>(
    adapter: S,
    job_id: String,
    token: SessionToken,
    sink: Sink,
) {
    let mut payloads = match adapter.connect(&job_id).await {
        Ok(payloads) => payloads,
        Err(e) => {
            sink(TrackerEvent::TransportFailed {
                token,
                reason: e.to_string(),
            });
            return;
        }
    };

    while let Some(item) = payloads.next().await {
        let keep_reading = match item {
            Ok(raw) => deliver(&sink, token, &raw),
            Err(e) => {
                sink(TrackerEvent::TransportFailed {
                    token,
                    reason: e.to_string(),
                });
                false
            }
        };
        if !keep_reading {
            return;
        }
    }

    sink(TrackerEvent::TransportFailed {
        token,
        reason: TransportError::Closed.to_string(),
    });
}

/// First request goes out one interval after opening; requests never overlap
pub(crate) async fn run_poll<P: PollAdapter>(
    adapter: P,
    job_id: String,
    token: SessionToken,
    interval: Duration,
    sink: Sink,
) {
    let mut ticks = tokio::time::interval_at(Instant::now() + interval, interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;
        let keep_polling = match adapter.fetch_status(&job_id).await {
            Ok(raw) => deliver(&sink, token, &raw),
            Err(e) => {
                sink(TrackerEvent::TransportFailed {
                    token,
                    reason: e.to_string(),
                });
                false
            }
        };
        if !keep_polling {
            return;
        }
    }
}

/// Decode and forward one payload. Malformed payloads are dropped.
fn deliver(sink: &Sink, token: SessionToken, raw: &str) -> bool {
    match StatusUpdate::decode(raw) {
        Ok(update) => sink(TrackerEvent::TransportUpdate { token, update }),
        Err(e) => {
            tracing::warn!(%token, error = %e, payload = raw, "dropping malformed payload");
            true
        }
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
