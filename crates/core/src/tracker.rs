// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker state machine
//!
//! The tracker owns the [`JobState`] together with the bookkeeping that
//! keeps transports and the deadline in step with it: which transport is
//! open and under which token, and which token the deadline was armed with.
//!
//! It performs no I/O. Each [`TrackerEvent`] yields a new tracker and the
//! effects the runtime must execute, in order.
//!
//! Invariants upheld after every transition:
//! - a transport is open if and only if the job is running
//! - the deadline is armed if and only if the job is running
//! - a terminal job only leaves its status through `Start` or `Reset`

use crate::clock::Clock;
use crate::effect::{Effect, SessionToken, TrackerEvent, TransportKind};
use crate::job::JobState;
use crate::status::FailureKind;
use crate::update::{Directive, StatusUpdate};
use std::time::Duration;

/// Error shown when the status endpoint cannot be reached
pub const POLL_FAILURE: &str = "Failed to get job status";
/// Error shown when the overall deadline passes
pub const TIMEOUT_MESSAGE: &str = "SSE timeout";
/// Error shown after a user cancel
pub const CANCEL_MESSAGE: &str = "Processing cancelled";
/// Message shown while switching from the stream to polling
pub const FALLBACK_MESSAGE: &str = "Falling back to status checks...";

#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    job: JobState,
    transport: Option<(TransportKind, SessionToken)>,
    timeout: Option<SessionToken>,
    next_token: u64,
    timeout_after: Duration,
    poll_interval: Duration,
}

impl Tracker {
    pub fn new(timeout_after: Duration, poll_interval: Duration) -> Self {
        Self {
            job: JobState::default(),
            transport: None,
            timeout: None,
            next_token: 1,
            timeout_after,
            poll_interval,
        }
    }

    pub fn job(&self) -> &JobState {
        &self.job
    }

    /// The open transport and the token it was opened under
    pub fn active_transport(&self) -> Option<(TransportKind, SessionToken)> {
        self.transport
    }

    pub fn timeout_token(&self) -> Option<SessionToken> {
        self.timeout
    }

    /// True if events tagged with `token` come from the open transport
    pub fn accepts(&self, token: SessionToken) -> bool {
        self.job.status().is_running() && self.transport.map(|(_, t)| t) == Some(token)
    }

    /// Check that transports and the deadline agree with the job status
    pub fn is_consistent(&self) -> bool {
        let running = self.job.status().is_running();
        running == self.transport.is_some() && running == self.timeout.is_some()
    }

    /// Pure state transition: returns the new tracker and effects to execute
    pub fn transition(&self, event: TrackerEvent, clock: &impl Clock) -> (Tracker, Vec<Effect>) {
        let mut next = self.clone();
        let effects = next.apply(event, clock);
        debug_assert!(next.is_consistent(), "tracker out of step: {:?}", next);
        (next, effects)
    }

    fn apply(&mut self, event: TrackerEvent, clock: &impl Clock) -> Vec<Effect> {
        match event {
            TrackerEvent::Start { job_id } => self.start(job_id, clock),

            TrackerEvent::TransportUpdate { token, update } => {
                if !self.accepts(token) {
                    return vec![];
                }
                self.update(update, clock)
            }

            TrackerEvent::TransportFailed { token, .. } => {
                if !self.accepts(token) {
                    return vec![];
                }
                match self.transport {
                    Some((TransportKind::Stream, _)) => self.fall_back(token),
                    _ => self.fail(FailureKind::Failed, POLL_FAILURE.to_string(), clock),
                }
            }

            TrackerEvent::TimeoutFired { token } => {
                if !self.job.status().is_running() || self.timeout != Some(token) {
                    return vec![];
                }
                // Already fired, nothing to disarm
                self.timeout = None;
                self.fail(FailureKind::TimedOut, TIMEOUT_MESSAGE.to_string(), clock)
            }

            TrackerEvent::Cancel => {
                if !self.job.status().is_running() {
                    return vec![];
                }
                self.fail(FailureKind::Cancelled, CANCEL_MESSAGE.to_string(), clock)
            }

            TrackerEvent::Reset => {
                let abandoned = if self.job.status().is_running() {
                    self.job.job_id().map(str::to_string)
                } else {
                    None
                };
                let mut effects = self.teardown();
                self.job.clear();
                effects.push(Effect::Publish);
                if let Some(job_id) = abandoned {
                    effects.push(Effect::Abandon { job_id });
                }
                effects
            }
        }
    }

    fn start(&mut self, job_id: String, clock: &impl Clock) -> Vec<Effect> {
        if self.job.status().is_running() {
            return vec![];
        }
        self.job.begin(job_id.clone(), clock.now());

        let timeout = self.issue();
        let stream = self.issue();
        self.timeout = Some(timeout);
        self.transport = Some((TransportKind::Stream, stream));

        vec![
            Effect::ArmTimeout {
                token: timeout,
                duration: self.timeout_after,
            },
            Effect::OpenStream {
                job_id,
                token: stream,
            },
            Effect::Publish,
        ]
    }

    fn update(&mut self, update: StatusUpdate, clock: &impl Clock) -> Vec<Effect> {
        match update.interpret() {
            Directive::Ignore => vec![],
            Directive::Progress { progress, message } => {
                self.job.apply_progress(progress, message.as_deref());
                vec![Effect::Publish]
            }
            Directive::Succeed { message, result } => {
                if message.is_some() {
                    self.job.apply_progress(None, message.as_deref());
                }
                let mut effects = self.teardown();
                self.job.apply_success(result, clock.now());
                let job_id = self.job.job_id().unwrap_or_default().to_string();
                effects.push(Effect::Publish);
                effects.push(Effect::NotifyComplete { job_id });
                effects
            }
            Directive::Fail { error } => self.fail(FailureKind::Failed, error, clock),
        }
    }

    fn fall_back(&mut self, stream: SessionToken) -> Vec<Effect> {
        let poll = self.issue();
        self.transport = Some((TransportKind::Poll, poll));
        self.job.apply_progress(None, Some(FALLBACK_MESSAGE));

        vec![
            Effect::CloseTransport {
                kind: TransportKind::Stream,
                token: stream,
            },
            Effect::OpenPoll {
                job_id: self.job.job_id().unwrap_or_default().to_string(),
                token: poll,
                interval: self.poll_interval,
            },
            Effect::Publish,
        ]
    }

    fn fail(&mut self, kind: FailureKind, message: String, clock: &impl Clock) -> Vec<Effect> {
        let mut effects = self.teardown();
        self.job.apply_failure(kind, message.clone(), clock.now());
        effects.push(Effect::Publish);
        effects.push(Effect::NotifyError {
            job_id: self.job.job_id().unwrap_or_default().to_string(),
            kind,
            message,
        });
        effects
    }

    /// Disarm the deadline and close the open transport, if any
    fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(token) = self.timeout.take() {
            effects.push(Effect::DisarmTimeout { token });
        }
        if let Some((kind, token)) = self.transport.take() {
            effects.push(Effect::CloseTransport { kind, token });
        }
        self.next_token += 1;
        effects
    }

    fn issue(&mut self) -> SessionToken {
        let token = SessionToken(self.next_token);
        self.next_token += 1;
        token
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
