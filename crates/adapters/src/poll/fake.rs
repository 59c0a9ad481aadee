// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake poll adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::PollAdapter;
use crate::error::TransportError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Recorded poll call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollCall {
    FetchStatus { job_id: String },
}

/// Fake poll adapter for testing
///
/// Responses are served in the order they were pushed. With the queue
/// empty, a request never resolves, like a server that has not answered yet.
#[derive(Clone, Default)]
pub struct FakePollAdapter {
    responses: Arc<Mutex<VecDeque<Result<String, TransportError>>>>,
    calls: Arc<Mutex<Vec<PollCall>>>,
}

impl FakePollAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PollCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Queue a successful response body
    pub fn push_response(&self, body: &str) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(body.to_string()));
    }

    /// Queue a failed request
    pub fn push_failure(&self, error: TransportError) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(error));
    }
}

#[async_trait]
impl PollAdapter for FakePollAdapter {
    async fn fetch_status(&self, job_id: &str) -> Result<String, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(PollCall::FetchStatus {
                job_id: job_id.to_string(),
            });

        let next = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(response) => response,
            None => std::future::pending().await,
        }
    }
}
