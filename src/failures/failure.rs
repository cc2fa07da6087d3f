//! # The failure object observed by the retry engine.
//!
//! [`Failure`] is what a work function returns on a failed attempt: a
//! [`FailureKind`] tag plus a message. The engine classifies it against the
//! active policy (kind coverage and message pattern) and either schedules a
//! retry or propagates the value unchanged.
//!
//! ## Example
//! ```rust
//! use retrier::{kind, Failure};
//!
//! let f = Failure::new(&kind::IO, "connection reset");
//! assert_eq!(f.kind(), &kind::IO);
//! assert_eq!(f.to_string(), "io: connection reset");
//! ```

use thiserror::Error;

use crate::failures::kind::{self, FailureKind};

/// What one attempt of the work function produces.
///
/// `Ok` carries the work's value; `Err` carries the [`Failure`] the engine
/// classifies. This is the explicit success/failure union the retry loop
/// branches on.
pub type Outcome<T> = Result<T, Failure>;

/// A classified failure: a kind tag and a human-readable message.
///
/// Propagated by value and never rewrapped, so the caller of
/// [`Retrier::run`](crate::Retrier::run) receives exactly the object the
/// work function produced.
#[derive(Clone, Debug, Error)]
#[error("{kind}: {message}")]
pub struct Failure {
    kind: &'static FailureKind,
    message: String,
}

impl Failure {
    /// Creates a failure of the given kind.
    pub fn new(kind: &'static FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a failure of the default-covered [`kind::STANDARD`] kind.
    pub fn standard(message: impl Into<String>) -> Self {
        Self::new(&kind::STANDARD, message)
    }

    /// Creates a failure of the [`kind::RUNTIME`] kind.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(&kind::RUNTIME, message)
    }

    /// Returns the kind tag.
    pub fn kind(&self) -> &'static FailureKind {
        self.kind
    }

    /// Returns the message text the `matching` pattern is applied to.
    pub fn message(&self) -> &str {
        &self.message
    }
}
