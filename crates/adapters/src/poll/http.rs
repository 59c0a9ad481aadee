// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::PollAdapter;
use crate::error::TransportError;
use crate::http::{ApiClient, Endpoint};
use async_trait::async_trait;

/// Reads the job's `status` endpoint
#[derive(Clone)]
pub struct HttpPollAdapter {
    api: ApiClient,
}

impl HttpPollAdapter {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PollAdapter for HttpPollAdapter {
    async fn fetch_status(&self, job_id: &str) -> Result<String, TransportError> {
        let response = self
            .api
            .get(job_id, Endpoint::Status, "application/json")
            .await?;
        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
