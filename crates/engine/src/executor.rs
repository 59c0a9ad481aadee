// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::error::TrackError;
use crate::orchestrator::{Inner, Shared};
use crate::transport::{Sink, TransportHandle};
use jw_adapters::{PollAdapter, StreamAdapter};
use jw_core::{Clock, Effect, FailureKind, SessionToken, TracedEffect, TrackerEvent};
use std::sync::Arc;

/// Callback to run once the orchestrator lock is released
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notification {
    Complete(String),
    Error(String),
}

/// Execute a single effect with tracing
///
/// Runs under the orchestrator lock, so nothing here may block.
pub(crate) fn execute<S, P, C>(
    inner: &Arc<Inner<S, P, C>>,
    shared: &mut Shared,
    effect: Effect,
) -> Option<Notification>
where
    S: StreamAdapter,
    P: PollAdapter,
    C: Clock,
{
    let span = tracing::info_span!("effect", effect = effect.name());
    let _guard = span.enter();
    tracing::trace!(fields = ?effect.fields(), "executing");

    match effect {
        Effect::OpenStream { job_id, token } => {
            shared.transport = Some(TransportHandle::spawn_stream(
                inner.stream.clone(),
                job_id,
                token,
                sink(inner, token),
            ));
            None
        }

        Effect::OpenPoll {
            job_id,
            token,
            interval,
        } => {
            tracing::warn!(%job_id, "event stream unavailable, falling back to status checks");
            shared.transport = Some(TransportHandle::spawn_poll(
                inner.poll.clone(),
                job_id,
                token,
                interval,
                sink(inner, token),
            ));
            None
        }

        Effect::CloseTransport { kind, token } => {
            match shared.transport.take() {
                // Dropping the handle aborts the reader task
                Some(handle) if handle.token == token => drop(handle),
                other => {
                    tracing::debug!(%kind, %token, "transport already closed");
                    shared.transport = other;
                }
            }
            None
        }

        Effect::ArmTimeout { token, duration } => {
            let weak = Arc::downgrade(inner);
            shared.timeout.arm(token, duration, move |token| {
                if let Some(inner) = weak.upgrade() {
                    inner.dispatch(TrackerEvent::TimeoutFired { token });
                }
            });
            None
        }

        Effect::DisarmTimeout { token } => {
            if shared.timeout.token() == Some(token) {
                shared.timeout.disarm();
            }
            None
        }

        Effect::Publish => {
            let snapshot = shared.tracker.job().snapshot();
            tracing::debug!(
                status = %snapshot.status,
                progress = snapshot.progress,
                message = %snapshot.message,
                "state changed"
            );
            inner.snapshots.send_replace(snapshot);
            None
        }

        Effect::NotifyComplete { job_id } => {
            tracing::info!(%job_id, "job completed");
            resolve(shared, Ok(()));
            Some(Notification::Complete(job_id))
        }

        Effect::NotifyError {
            job_id,
            kind,
            message,
        } => {
            match kind {
                FailureKind::Cancelled => tracing::info!(%job_id, "tracking cancelled"),
                FailureKind::Failed | FailureKind::TimedOut => {
                    tracing::error!(%job_id, %kind, error = %message, "job did not complete")
                }
            }
            resolve(shared, Err(TrackError::from_failure(kind, message.clone())));
            Some(Notification::Error(message))
        }

        Effect::Abandon { job_id } => {
            tracing::info!(%job_id, "tracking reset while running");
            resolve(shared, Err(TrackError::Abandoned(job_id)));
            None
        }
    }
}

/// Sink for a transport opened under `token`
///
/// Holds only a weak reference so an abandoned reader task cannot keep
/// the orchestrator alive.
fn sink<S, P, C>(inner: &Arc<Inner<S, P, C>>, token: SessionToken) -> Sink
where
    S: StreamAdapter,
    P: PollAdapter,
    C: Clock,
{
    let weak = Arc::downgrade(inner);
    Arc::new(move |event| match weak.upgrade() {
        Some(inner) => {
            inner.dispatch(event);
            inner.accepts(token)
        }
        None => false,
    })
}

fn resolve(shared: &mut Shared, outcome: Result<(), TrackError>) {
    if let Some(waiter) = shared.waiter.take() {
        // The caller may have stopped waiting
        let _ = waiter.send(outcome);
    }
}
