// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-core: Core library for the jobwatch job tracker
//!
//! This crate provides:
//! - The job state store and its mutators
//! - Decoding and interpretation of job status payloads
//! - A pure tracker state machine that turns events into effects
//! - Configuration shared by the adapters, engine, and CLI

pub mod clock;
pub mod config;

// State machines (order matters for dependencies)
pub mod status;
pub mod update;
pub mod job;
pub mod effect;
pub mod tracker;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, TrackerConfig};
pub use effect::{Effect, SessionToken, TracedEffect, TrackerEvent, TransportKind};
pub use job::{JobSnapshot, JobState};
pub use status::{FailureKind, JobStatus};
pub use tracker::Tracker;
pub use update::{DecodeError, Directive, StatusUpdate};
