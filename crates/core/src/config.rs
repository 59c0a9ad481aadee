// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker configuration
//!
//! Values are layered: built-in defaults, then `JW_*` environment
//! variables, then whatever the caller sets explicitly (CLI flags).

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

pub const ENV_API_URL: &str = "JW_API_URL";
pub const ENV_AUTH_TOKEN: &str = "JW_AUTH_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "JW_TIMEOUT_MS";
pub const ENV_POLL_INTERVAL_MS: &str = "JW_POLL_INTERVAL_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api base url is empty")]
    EmptyApiUrl,
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    #[error("invalid duration '{0}': expected milliseconds or a value like '5m'")]
    InvalidDuration(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Base URL for both the event stream and the status endpoint
    pub api_base_url: String,
    /// Sent as a bearer credential on every request
    pub auth_token: Option<String>,
    /// Overall deadline, measured from start
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

// The token stays out of debug output
impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("api_base_url", &self.api_base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl fmt::Display for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (timeout {}, poll every {}",
            self.api_base_url,
            humantime::format_duration(self.timeout),
            humantime::format_duration(self.poll_interval)
        )?;
        if self.auth_token.is_some() {
            f.write_str(", authenticated")?;
        }
        f.write_str(")")
    }
}

impl TrackerConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`
    ///
    /// Unparseable durations are logged and skipped so a typo in the
    /// environment falls back to the default instead of aborting.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN).filter(|v| !v.is_empty()) {
            config.auth_token = Some(token);
        }
        if let Some(timeout) = duration_ms(&lookup, ENV_TIMEOUT_MS) {
            config.timeout = timeout;
        }
        if let Some(interval) = duration_ms(&lookup, ENV_POLL_INTERVAL_MS) {
            config.poll_interval = interval;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

/// Parse a duration given as plain milliseconds or in humantime form ("90s", "5m")
pub fn parse_duration(raw: &str) -> Result<Duration, ConfigError> {
    let raw = raw.trim();
    if let Ok(ms) = raw.parse::<u64>() {
        return Ok(Duration::from_millis(ms));
    }
    humantime::parse_duration(raw).map_err(|_| ConfigError::InvalidDuration(raw.to_string()))
}

fn duration_ms(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<Duration> {
    let raw = lookup(var)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!(var, value = %raw, "ignoring non-numeric duration");
            None
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
