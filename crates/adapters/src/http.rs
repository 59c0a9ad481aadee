// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared HTTP client for the job endpoints
//!
//! Both transports address the same resource:
//! `{base}/api/transcripts/jobs/{job_id}/events` for the event stream and
//! `{base}/api/transcripts/jobs/{job_id}/status` for status checks.

use crate::error::TransportError;
use jw_core::TrackerConfig;
use reqwest::{RequestBuilder, Response, Url};

/// Endpoint leaf under a job resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Events,
    Status,
}

impl Endpoint {
    fn segment(self) -> &'static str {
        match self {
            Endpoint::Events => "events",
            Endpoint::Status => "status",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &TrackerConfig) -> Result<Self, TransportError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(
        client: reqwest::Client,
        config: &TrackerConfig,
    ) -> Result<Self, TransportError> {
        let base = Url::parse(config.api_base_url.trim())
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", config.api_base_url, e)))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(config.api_base_url.clone()));
        }
        Ok(Self {
            client,
            base,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of `endpoint` for `job_id`; the id is percent-encoded as one segment
    pub fn job_url(&self, job_id: &str, endpoint: Endpoint) -> Result<Url, TransportError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(["api", "transcripts", "jobs", job_id, endpoint.segment()]);
        Ok(url)
    }

    /// Issue an authenticated GET and reject non-success statuses
    pub async fn get(
        &self,
        job_id: &str,
        endpoint: Endpoint,
        accept: &str,
    ) -> Result<Response, TransportError> {
        let url = self.job_url(job_id, endpoint)?;
        let response = self
            .request(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response)
    }

    fn request(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
