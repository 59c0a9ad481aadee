// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake stream adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PayloadStream, StreamAdapter};
use crate::error::TransportError;
use async_trait::async_trait;
use futures_util::stream;
use futures_util::StreamExt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Item = Result<String, TransportError>;

/// Recorded stream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamCall {
    Connect { job_id: String },
}

#[derive(Default)]
struct FakeStreamState {
    calls: Vec<StreamCall>,
    refuse: Option<TransportError>,
    senders: HashMap<String, mpsc::UnboundedSender<Item>>,
    pending: HashMap<String, Vec<Item>>,
}

/// Fake stream adapter for testing
///
/// Payloads sent before a job connects are queued and delivered on connect.
/// `opened()` and `closed()` count connections and dropped streams so tests
/// can check that every stream handed out was released.
#[derive(Clone, Default)]
pub struct FakeStreamAdapter {
    inner: Arc<Mutex<FakeStreamState>>,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

/// Counts a stream as closed when it is dropped
struct CloseGuard(Arc<AtomicUsize>);

impl Drop for CloseGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl FakeStreamAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StreamCall> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).calls.clone()
    }

    /// Make every later `connect` fail with `error`
    pub fn refuse_connections(&self, error: TransportError) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).refuse = Some(error);
    }

    /// Deliver a payload to the job's stream
    pub fn send(&self, job_id: &str, payload: &str) {
        self.push(job_id, Ok(payload.to_string()));
    }

    /// Deliver a read error to the job's stream
    pub fn fail(&self, job_id: &str, error: TransportError) {
        self.push(job_id, Err(error));
    }

    /// End the job's stream as if the server hung up
    pub fn disconnect(&self, job_id: &str) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .senders
            .remove(job_id);
    }

    /// Number of streams handed out
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of streams that have been dropped or ended
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    /// True while a stream for the job is held by a reader
    pub fn is_connected(&self, job_id: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .senders
            .get(job_id)
            .is_some_and(|tx| !tx.is_closed())
    }

    fn push(&self, job_id: &str, item: Item) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        match state.senders.get(job_id) {
            // A dropped reader discards the item, like a closed socket
            Some(tx) => {
                let _ = tx.send(item);
            }
            None => state
                .pending
                .entry(job_id.to_string())
                .or_default()
                .push(item),
        }
    }
}

#[async_trait]
impl StreamAdapter for FakeStreamAdapter {
    async fn connect(&self, job_id: &str) -> Result<PayloadStream, TransportError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(StreamCall::Connect {
            job_id: job_id.to_string(),
        });
        if let Some(error) = &state.refuse {
            return Err(error.clone());
        }

        let (tx, rx) = mpsc::unbounded_channel();
        for item in state.pending.remove(job_id).unwrap_or_default() {
            let _ = tx.send(item);
        }
        state.senders.insert(job_id.to_string(), tx);
        self.opened.fetch_add(1, Ordering::SeqCst);

        let guard = CloseGuard(Arc::clone(&self.closed));
        let payloads = stream::unfold((rx, guard), |(mut rx, guard)| async move {
            let item = rx.recv().await?;
            Some((item, (rx, guard)))
        });
        Ok(payloads.boxed())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
