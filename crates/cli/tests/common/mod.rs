// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Environment variables that would leak the developer's setup into a test
const JW_ENV: [&str; 5] = [
    "JW_API_URL",
    "JW_AUTH_TOKEN",
    "JW_TIMEOUT_MS",
    "JW_POLL_INTERVAL_MS",
    "RUST_LOG",
];

pub fn events_path(job_id: &str) -> String {
    format!("/api/transcripts/jobs/{}/events", job_id)
}

pub fn status_path(job_id: &str) -> String {
    format!("/api/transcripts/jobs/{}/status", job_id)
}

/// GET on the job's event stream
pub fn events(job_id: &str) -> MockBuilder {
    Mock::given(method("GET")).and(path(events_path(job_id)))
}

/// GET on the job's status endpoint
pub fn status(job_id: &str) -> MockBuilder {
    Mock::given(method("GET")).and(path(status_path(job_id)))
}

/// Event stream made of one `data:` frame per payload; the server closes it after the last
pub fn frames(payloads: &[&str]) -> ResponseTemplate {
    let body: String = payloads
        .iter()
        .map(|json| format!("data: {}\n\n", json))
        .collect();
    ResponseTemplate::new(200).set_body_raw(body, "text/event-stream")
}

pub fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

/// Event stream that sends nothing for a long time
pub fn silent_stream() -> ResponseTemplate {
    frames(&[]).set_delay(Duration::from_secs(30))
}

/// `jw` pointed at `server` with a clean environment
pub fn jw_for(server: &MockServer) -> Command {
    let mut cmd = jw();
    cmd.args(["--api-url", &server.uri()]);
    cmd
}

/// `jw` with a clean environment
pub fn jw() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("jw").expect("jw binary");
    for var in JW_ENV {
        cmd.env_remove(var);
    }
    cmd.timeout(Duration::from_secs(30));
    cmd
}
