// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jobwatch tracking engine

mod error;
mod executor;
mod orchestrator;
pub mod timeout;
mod transport;

pub use error::TrackError;
pub use orchestrator::{Orchestrator, OrchestratorBuilder};
pub use timeout::TimeoutGuard;
