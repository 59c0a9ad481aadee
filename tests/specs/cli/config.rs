//! Configuration validation specs
//!
//! Invalid settings are reported before any request is made.

use crate::prelude::*;

#[test]
fn zero_poll_interval_is_rejected() {
    jw().args(&["--poll-interval", "0", "watch", "job-1"])
        .fails()
        .stderr_has("poll interval must be greater than zero");
}

#[test]
fn zero_timeout_from_environment_is_rejected() {
    jw().env("JW_TIMEOUT_MS", "0")
        .args(&["watch", "job-1"])
        .fails()
        .stderr_has("timeout must be greater than zero");
}

#[test]
fn empty_api_url_is_rejected() {
    jw().args(&["--api-url", " ", "status", "job-1"])
        .fails()
        .stderr_has("api base url is empty");
}

#[test]
fn unparseable_duration_is_a_usage_error() {
    jw().args(&["--timeout", "soon", "watch", "job-1"])
        .misused()
        .stderr_has("expected milliseconds or a value like '5m'");
}

#[test]
fn non_http_scheme_is_rejected() {
    jw().args(&["--api-url", "file:///tmp/api", "status", "job-1"])
        .fails()
        .stdout_eq("")
        .stderr_has("invalid url");
}
