// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine error types.
//!
//! The derivation modules are total over well-formed input: empty input
//! degrades to zeroed results and malformed records are skipped, never
//! raised. The only failures are unrecognized enumerated options and
//! persistence errors surfaced by the streak store collaborator.

/// Error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Streak store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl InsightError {
    /// Whether this error came from the storage collaborator.
    ///
    /// Store failures are the caller's to retry; the engine never retries
    /// them and never leaves partial state behind.
    pub fn is_store_error(&self) -> bool {
        matches!(self, InsightError::Store(_))
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, InsightError>;
