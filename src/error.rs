//! Error types produced by the retry engine.
//!
//! [`RetryError`] covers the three ways a call can fail:
//!
//! - [`RetryError::InvalidOptions`] — an options value carried an
//!   unrecognized key or a malformed value; raised before any merge,
//!   attempt, or mutation of stored state.
//! - [`RetryError::Nested`] — a retry loop was started while another loop's
//!   nesting marker is active on the same context; raised before the inner
//!   loop's first attempt.
//! - [`RetryError::Failed`] — the work function's terminal [`Failure`],
//!   propagated unchanged.
//!
//! Control-flow errors (`InvalidOptions`, `Nested`) are never themselves
//! subject to the retry policy.

use thiserror::Error;

use crate::core::CallSite;
use crate::failures::Failure;

/// # Errors produced by [`Retrier::run`](crate::Retrier::run) and
/// [`Retrier::configure`](crate::Retrier::configure).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RetryError {
    /// An options value carried an unrecognized key or a malformed value.
    #[error("invalid option {key:?}: {reason}")]
    InvalidOptions {
        /// The offending key, exactly as supplied.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A retry loop is already active on this context.
    #[error("retry loop already active on this context (opened at {site})")]
    Nested {
        /// The call site that opened the still-active outer loop.
        site: CallSite,
    },

    /// The work function's terminal failure, unchanged.
    #[error(transparent)]
    Failed(#[from] Failure),
}

impl RetryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use retrier::{kind, Failure, RetryError};
    ///
    /// let err = RetryError::from(Failure::new(&kind::RUNTIME, "boom"));
    /// assert_eq!(err.as_label(), "failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RetryError::InvalidOptions { .. } => "invalid_options",
            RetryError::Nested { .. } => "nested",
            RetryError::Failed(_) => "failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RetryError::InvalidOptions { key, reason } => {
                format!("option {key:?} rejected: {reason}")
            }
            RetryError::Nested { site } => format!("retry loop already open at {site}"),
            RetryError::Failed(failure) => failure.to_string(),
        }
    }

    /// The propagated work failure, if that is what this error is.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RetryError::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Consumes the error and returns the propagated work failure, if any.
    pub fn into_failure(self) -> Option<Failure> {
        match self {
            RetryError::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
