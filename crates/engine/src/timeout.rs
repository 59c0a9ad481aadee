// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-shot deadline timer

use jw_core::SessionToken;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Owns at most one pending deadline
///
/// The firing callback receives the token it was armed with. The guard
/// only aborts the timer task; rejecting a fire that raced with `disarm`
/// is up to the receiver, which compares tokens.
#[derive(Debug, Default)]
pub struct TimeoutGuard {
    armed: Option<(SessionToken, JoinHandle<()>)>,
}

impl TimeoutGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a deadline, replacing any pending one
    pub fn arm<F>(&mut self, token: SessionToken, duration: Duration, on_fire: F)
    where
        F: FnOnce(SessionToken) + Send + 'static,
    {
        self.disarm();
        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            on_fire(token);
        });
        self.armed = Some((token, task));
    }

    /// Cancel the pending deadline. Safe to call when nothing is armed.
    pub fn disarm(&mut self) {
        if let Some((_, task)) = self.armed.take() {
            task.abort();
        }
    }

    /// Forget a deadline that has already fired
    pub fn expire(&mut self, token: SessionToken) {
        if self.token() == Some(token) {
            self.armed = None;
        }
    }

    /// Token of the pending deadline
    pub fn token(&self) -> Option<SessionToken> {
        self.armed.as_ref().map(|(token, _)| *token)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;
