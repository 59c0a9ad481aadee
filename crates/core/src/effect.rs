// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for the tracker state machine

use crate::status::FailureKind;
use crate::update::StatusUpdate;
use std::fmt;
use std::time::Duration;

/// Identifies one monitoring session
///
/// Every transport and timeout is opened under a token. Events carrying a
/// token the tracker no longer holds are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(pub u64);

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which channel is delivering updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Server-pushed event stream
    Stream,
    /// Periodic status requests
    Poll,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Stream => "stream",
            TransportKind::Poll => "poll",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to [`crate::Tracker::transition`]
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// Begin tracking a job
    Start { job_id: String },
    /// A transport delivered a decoded payload
    TransportUpdate {
        token: SessionToken,
        update: StatusUpdate,
    },
    /// A transport errored or closed
    TransportFailed { token: SessionToken, reason: String },
    /// The overall deadline elapsed
    TimeoutFired { token: SessionToken },
    /// User asked to stop tracking
    Cancel,
    /// Tear down and return to idle
    Reset,
}

/// Side effects the tracker requests
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Open the event stream for a job
    OpenStream { job_id: String, token: SessionToken },
    /// Start polling the status endpoint
    OpenPoll {
        job_id: String,
        token: SessionToken,
        interval: Duration,
    },
    /// Close the transport opened under `token`
    CloseTransport {
        kind: TransportKind,
        token: SessionToken,
    },
    /// Schedule the overall deadline
    ArmTimeout {
        token: SessionToken,
        duration: Duration,
    },
    /// Cancel the deadline armed under `token`
    DisarmTimeout { token: SessionToken },
    /// Push the current snapshot to observers
    Publish,
    /// Run the completion callback
    NotifyComplete { job_id: String },
    /// Run the error callback
    NotifyError {
        job_id: String,
        kind: FailureKind,
        message: String,
    },
    /// A running job was reset away; wake its waiter
    Abandon { job_id: String },
}

/// Describes an effect for structured logging
pub trait TracedEffect {
    /// Effect name for log spans (e.g., "open_stream", "arm_timeout")
    fn name(&self) -> &'static str;

    /// Key-value pairs for structured logging
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::OpenStream { .. } => "open_stream",
            Effect::OpenPoll { .. } => "open_poll",
            Effect::CloseTransport { .. } => "close_transport",
            Effect::ArmTimeout { .. } => "arm_timeout",
            Effect::DisarmTimeout { .. } => "disarm_timeout",
            Effect::Publish => "publish",
            Effect::NotifyComplete { .. } => "notify_complete",
            Effect::NotifyError { .. } => "notify_error",
            Effect::Abandon { .. } => "abandon",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::OpenStream { job_id, token } => {
                vec![("job_id", job_id.clone()), ("token", token.to_string())]
            }
            Effect::OpenPoll {
                job_id,
                token,
                interval,
            } => vec![
                ("job_id", job_id.clone()),
                ("token", token.to_string()),
                ("interval_ms", interval.as_millis().to_string()),
            ],
            Effect::CloseTransport { kind, token } => {
                vec![("kind", kind.to_string()), ("token", token.to_string())]
            }
            Effect::ArmTimeout { token, duration } => vec![
                ("token", token.to_string()),
                ("duration_ms", duration.as_millis().to_string()),
            ],
            Effect::DisarmTimeout { token } => vec![("token", token.to_string())],
            Effect::Publish => vec![],
            Effect::NotifyComplete { job_id } | Effect::Abandon { job_id } => {
                vec![("job_id", job_id.clone())]
            }
            Effect::NotifyError {
                job_id,
                kind,
                message,
            } => vec![
                ("job_id", job_id.clone()),
                ("kind", kind.to_string()),
                ("message", message.clone()),
            ],
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
