//! # The per-attempt logging hook.
//!
//! [`Notify`] is invoked by the engine before every attempt, including the
//! first: it receives the configured task label, the zero-based attempt
//! index, and the previous attempt's failure (`None` on attempt 0).
//!
//! Any `Fn(Option<&str>, u32, Option<&Failure>)` is a `Notify`, so a
//! closure slots straight into the `logger` option:
//!
//! ```rust
//! use retrier::{Failure, Notify};
//!
//! let hook = |task: Option<&str>, attempt: u32, _previous: Option<&Failure>| {
//!     eprintln!("{}: attempt {attempt}", task.unwrap_or(""));
//! };
//! hook.call(Some("sync inventory"), 0, None);
//! ```

use std::sync::Arc;

use crate::failures::Failure;

/// Hook called before each attempt of a retry loop.
pub trait Notify: Send + Sync {
    /// `task` is the configured label (if any), `attempt` the zero-based
    /// index of the attempt about to run, `previous` the failure that ended
    /// the prior attempt (`None` on the first).
    fn call(&self, task: Option<&str>, attempt: u32, previous: Option<&Failure>);
}

/// Shared handle to a logging hook, as stored in the configuration.
pub type NotifyRef = Arc<dyn Notify>;

impl<F> Notify for F
where
    F: Fn(Option<&str>, u32, Option<&Failure>) + Send + Sync,
{
    fn call(&self, task: Option<&str>, attempt: u32, previous: Option<&Failure>) {
        self(task, attempt, previous)
    }
}
