// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for job status transports

pub mod error;
pub mod http;
pub mod poll;
pub mod stream;
pub mod traced;

pub use error::TransportError;
pub use http::ApiClient;
pub use poll::{HttpPollAdapter, PollAdapter};
pub use stream::{HttpStreamAdapter, PayloadStream, StreamAdapter};
pub use traced::{TracedPollAdapter, TracedStreamAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use poll::{FakePollAdapter, PollCall};
#[cfg(any(test, feature = "test-support"))]
pub use stream::{FakeStreamAdapter, StreamCall};
