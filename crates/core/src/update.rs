// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job status payloads
//!
//! The streaming endpoint and the status endpoint both deliver the same
//! JSON shape. Every field is optional:
//!
//! ```json
//! {"type": "ping", "status": "processing", "progress": 34.9,
//!  "message": "Analyzing...", "error": null}
//! ```
//!
//! [`StatusUpdate::interpret`] turns a decoded payload into a [`Directive`]
//! for the tracker. Fields the tracker doesn't understand are kept in
//! `extra` so a completion payload can be handed back as the job result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error string used when the server reports failure without a reason
pub const DEFAULT_FAILURE: &str = "Processing failed";

/// Errors from decoding a status payload
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty status payload")]
    Empty,
    #[error("malformed status payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single decoded status message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Message tag, `"ping"` for keep-alives
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Percentage; the server may send fractional values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the tracker should do with an update
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Keep-alive or empty update; change nothing
    Ignore,
    /// Overwrite whichever of progress/message are present
    Progress {
        progress: Option<u8>,
        message: Option<String>,
    },
    /// The job finished; `result` is the full completion payload
    Succeed {
        message: Option<String>,
        result: Value,
    },
    /// The job failed remotely
    Fail { error: String },
}

impl StatusUpdate {
    /// Decode a raw JSON payload
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Progress rounded to a whole percentage and clamped to 0..=100
    pub fn progress_percent(&self) -> Option<u8> {
        self.progress.and_then(normalize_progress)
    }

    /// Interpret the update
    ///
    /// An `error` field wins over everything else, then `status`. An update
    /// carrying neither progress nor message, such as a bare ping, is ignored.
    pub fn interpret(&self) -> Directive {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return Directive::Fail {
                error: error.to_string(),
            };
        }

        match self.status.as_deref() {
            Some("failed") => {
                return Directive::Fail {
                    error: DEFAULT_FAILURE.to_string(),
                }
            }
            Some("completed") => {
                return Directive::Succeed {
                    message: self.message.clone(),
                    result: serde_json::to_value(self).unwrap_or_default(),
                }
            }
            _ => {}
        }

        let progress = self.progress_percent();
        if progress.is_none() && self.message.is_none() {
            return Directive::Ignore;
        }

        Directive::Progress {
            progress,
            message: self.message.clone(),
        }
    }
}

fn normalize_progress(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
