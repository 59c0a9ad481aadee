// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport errors

use thiserror::Error;

/// Errors from opening or reading a transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("failed to read response: {0}")]
    Body(String),
    #[error("stream closed by server")]
    Closed,
}
