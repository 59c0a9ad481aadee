// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job tracking orchestrator
//!
//! [`Orchestrator`] is the public face of the engine. It owns one
//! [`Tracker`] behind a mutex, feeds it events from callers, transport
//! tasks and the deadline timer, and executes the effects it returns while
//! still holding the lock. Callbacks run after the lock is released, so a
//! callback may call back into the orchestrator.

use crate::error::TrackError;
use crate::executor::{self, Notification};
use crate::timeout::TimeoutGuard;
use crate::transport::TransportHandle;
use jw_adapters::{PollAdapter, StreamAdapter};
use jw_core::{
    Clock, ConfigError, JobSnapshot, SessionToken, SystemClock, Tracker, TrackerConfig,
    TrackerEvent, TransportKind,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{oneshot, watch};

pub(crate) type Callback = Arc<dyn Fn(&str) + Send + Sync>;

/// Tracks one job at a time over a stream with polling fallback
pub struct Orchestrator<S, P, C = SystemClock> {
    inner: Arc<Inner<S, P, C>>,
}

impl<S, P, C> Clone for Orchestrator<S, P, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

pub(crate) struct Inner<S, P, C> {
    pub stream: S,
    pub poll: P,
    clock: C,
    config: TrackerConfig,
    on_complete: Option<Callback>,
    on_error: Option<Callback>,
    shared: Mutex<Shared>,
    pub snapshots: watch::Sender<JobSnapshot>,
}

/// State guarded by the orchestrator lock
pub(crate) struct Shared {
    pub tracker: Tracker,
    pub transport: Option<TransportHandle>,
    pub timeout: TimeoutGuard,
    /// Resolves the pending `start` call
    pub waiter: Option<oneshot::Sender<Result<(), TrackError>>>,
}

/// Builder for [`Orchestrator`]
pub struct OrchestratorBuilder<S, P, C> {
    stream: S,
    poll: P,
    clock: C,
    config: TrackerConfig,
    on_complete: Option<Callback>,
    on_error: Option<Callback>,
}

impl<S, P> Orchestrator<S, P, SystemClock>
where
    S: StreamAdapter,
    P: PollAdapter,
{
    pub fn builder(stream: S, poll: P) -> OrchestratorBuilder<S, P, SystemClock> {
        OrchestratorBuilder {
            stream,
            poll,
            clock: SystemClock,
            config: TrackerConfig::default(),
            on_complete: None,
            on_error: None,
        }
    }
}

impl<S, P, C> OrchestratorBuilder<S, P, C>
where
    S: StreamAdapter,
    P: PollAdapter,
    C: Clock,
{
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> OrchestratorBuilder<S, P, C2> {
        OrchestratorBuilder {
            stream: self.stream,
            poll: self.poll,
            clock,
            config: self.config,
            on_complete: self.on_complete,
            on_error: self.on_error,
        }
    }

    /// Called with the job id when a job completes
    pub fn on_complete(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(f));
        self
    }

    /// Called with the error message when a job fails, times out or is cancelled
    pub fn on_error(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> Result<Orchestrator<S, P, C>, ConfigError> {
        self.config.validate()?;
        let tracker = Tracker::new(self.config.timeout, self.config.poll_interval);
        let (snapshots, _) = watch::channel(tracker.job().snapshot());

        Ok(Orchestrator {
            inner: Arc::new(Inner {
                stream: self.stream,
                poll: self.poll,
                clock: self.clock,
                config: self.config,
                on_complete: self.on_complete,
                on_error: self.on_error,
                shared: Mutex::new(Shared {
                    tracker,
                    transport: None,
                    timeout: TimeoutGuard::new(),
                    waiter: None,
                }),
                snapshots,
            }),
        })
    }
}

impl<S, P, C> Orchestrator<S, P, C>
where
    S: StreamAdapter,
    P: PollAdapter,
    C: Clock,
{
    /// Track `job_id` until it reaches a terminal status
    ///
    /// Resolves `Ok` on completion and `Err` on failure, timeout,
    /// cancellation, or a reset while running. Fails immediately with
    /// [`TrackError::AlreadyRunning`] if a job is being tracked.
    pub async fn start(&self, job_id: impl Into<String>) -> Result<(), TrackError> {
        let job_id = job_id.into();
        let done = {
            let mut shared = self.inner.lock();
            if let Some(current) = running_job(&shared) {
                return Err(TrackError::AlreadyRunning(current));
            }
            let (tx, rx) = oneshot::channel();
            shared.waiter = Some(tx);
            let notifications = self.inner.apply(
                &mut shared,
                TrackerEvent::Start {
                    job_id: job_id.clone(),
                },
            );
            drop(shared);
            self.inner.notify(notifications);
            rx
        };

        done.await
            .unwrap_or_else(|_| Err(TrackError::Abandoned(job_id)))
    }

    /// Stop tracking the running job and mark it cancelled. No-op otherwise.
    pub fn cancel(&self) {
        self.inner.dispatch(TrackerEvent::Cancel);
    }

    /// Close everything and return to idle
    pub fn reset(&self) {
        self.inner.dispatch(TrackerEvent::Reset);
    }

    pub fn snapshot(&self) -> JobSnapshot {
        self.inner.lock().tracker.job().snapshot()
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<JobSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Which transport is currently open, if any
    pub fn active_transport(&self) -> Option<TransportKind> {
        self.inner.lock().transport.as_ref().map(|t| t.kind)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.inner.config
    }
}

impl<S, P, C> Inner<S, P, C>
where
    S: StreamAdapter,
    P: PollAdapter,
    C: Clock,
{
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Feed one event through the tracker and run the callbacks it produces
    pub(crate) fn dispatch(self: &Arc<Self>, event: TrackerEvent) {
        let notifications = {
            let mut shared = self.lock();
            self.apply(&mut shared, event)
        };
        self.notify(notifications);
    }

    /// True if events tagged with `token` come from the open transport
    pub(crate) fn accepts(&self, token: SessionToken) -> bool {
        self.lock().tracker.accepts(token)
    }

    fn apply(self: &Arc<Self>, shared: &mut Shared, event: TrackerEvent) -> Vec<Notification> {
        if let Some(token) = stale_token(&shared.tracker, &event) {
            tracing::debug!(%token, event = event_name(&event), "dropping stale event");
            return Vec::new();
        }
        if let TrackerEvent::TimeoutFired { token } = &event {
            shared.timeout.expire(*token);
        }

        let (tracker, effects) = shared.tracker.transition(event, &self.clock);
        shared.tracker = tracker;

        effects
            .into_iter()
            .filter_map(|effect| executor::execute(self, shared, effect))
            .collect()
    }

    fn notify(&self, notifications: Vec<Notification>) {
        for notification in notifications {
            match notification {
                Notification::Complete(job_id) => {
                    if let Some(f) = &self.on_complete {
                        f(&job_id);
                    }
                }
                Notification::Error(message) => {
                    if let Some(f) = &self.on_error {
                        f(&message);
                    }
                }
            }
        }
    }
}

fn running_job(shared: &Shared) -> Option<String> {
    let job = shared.tracker.job();
    if job.status().is_running() {
        Some(job.job_id().unwrap_or_default().to_string())
    } else {
        None
    }
}

/// Token of a transport or timer event the tracker would reject
fn stale_token(tracker: &Tracker, event: &TrackerEvent) -> Option<SessionToken> {
    match event {
        TrackerEvent::TransportUpdate { token, .. } | TrackerEvent::TransportFailed { token, .. }
            if !tracker.accepts(*token) =>
        {
            Some(*token)
        }
        TrackerEvent::TimeoutFired { token }
            if !tracker.job().status().is_running() || tracker.timeout_token() != Some(*token) =>
        {
            Some(*token)
        }
        _ => None,
    }
}

fn event_name(event: &TrackerEvent) -> &'static str {
    match event {
        TrackerEvent::Start { .. } => "start",
        TrackerEvent::TransportUpdate { .. } => "transport_update",
        TrackerEvent::TransportFailed { .. } => "transport_failed",
        TrackerEvent::TimeoutFired { .. } => "timeout_fired",
        TrackerEvent::Cancel => "cancel",
        TrackerEvent::Reset => "reset",
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
