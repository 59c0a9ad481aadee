// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;
use yare::parameterized;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_service_conventions() {
    let config = TrackerConfig::default();

    assert_eq!(config.api_base_url, "http://localhost:8000");
    assert_eq!(config.auth_token, None);
    assert_eq!(config.timeout, Duration::from_millis(300_000));
    assert_eq!(config.poll_interval, Duration::from_millis(2000));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn empty_environment_yields_defaults() {
    assert_eq!(TrackerConfig::from_lookup(lookup(&[])), TrackerConfig::default());
}

#[test]
fn environment_overrides_defaults() {
    let config = TrackerConfig::from_lookup(lookup(&[
        ("JW_API_URL", "https://api.example.com "),
        ("JW_AUTH_TOKEN", "secret"),
        ("JW_TIMEOUT_MS", "60000"),
        ("JW_POLL_INTERVAL_MS", "500"),
    ]));

    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.auth_token.as_deref(), Some("secret"));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.poll_interval, Duration::from_millis(500));
}

#[test]
fn invalid_environment_values_fall_back() {
    let config = TrackerConfig::from_lookup(lookup(&[
        ("JW_API_URL", "   "),
        ("JW_AUTH_TOKEN", ""),
        ("JW_TIMEOUT_MS", "five minutes"),
        ("JW_POLL_INTERVAL_MS", "-1"),
    ]));

    assert_eq!(config, TrackerConfig::default());
}

#[parameterized(
    zero_timeout = { Duration::ZERO, Duration::from_secs(2), ConfigError::ZeroTimeout },
    zero_interval = { Duration::from_secs(1), Duration::ZERO, ConfigError::ZeroPollInterval },
)]
fn validate_rejects_zero_durations(timeout: Duration, poll_interval: Duration, expected: ConfigError) {
    let config = TrackerConfig {
        timeout,
        poll_interval,
        ..TrackerConfig::default()
    };
    assert_eq!(config.validate(), Err(expected));
}

#[test]
fn validate_rejects_empty_url() {
    let config = TrackerConfig {
        api_base_url: String::new(),
        ..TrackerConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::EmptyApiUrl));
}

#[parameterized(
    millis = { "2000", Duration::from_millis(2000) },
    seconds = { "90s", Duration::from_secs(90) },
    minutes = { "5m", Duration::from_secs(300) },
    padded = { " 250ms ", Duration::from_millis(250) },
)]
fn parse_duration_accepts(raw: &str, expected: Duration) {
    assert_eq!(parse_duration(raw), Ok(expected));
}

#[parameterized(
    empty = { "" },
    words = { "soon" },
    negative = { "-5s" },
)]
fn parse_duration_rejects(raw: &str) {
    assert!(matches!(parse_duration(raw), Err(ConfigError::InvalidDuration(_))));
}

#[test]
fn debug_output_redacts_token() {
    let config = TrackerConfig {
        auth_token: Some("secret".to_string()),
        ..TrackerConfig::default()
    };

    let debug = format!("{:?}", config);
    assert!(!debug.contains("secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn display_is_human_readable() {
    let config = TrackerConfig::default();
    assert_eq!(
        config.to_string(),
        "http://localhost:8000 (timeout 5m, poll every 2s)"
    );
}
