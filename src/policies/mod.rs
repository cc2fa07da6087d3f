//! Retry policies.
//!
//! This module groups the knobs that control **which** failures are retried
//! and **how long** to wait between attempts.
//!
//! ## Contents
//! - [`KindSet`]     which failure kinds a policy covers (ancestor walk)
//! - [`Pattern`]     message pattern a failure must match to be retried
//! - [`SleepPolicy`] how the backoff delay is resolved (none / fixed / computed)
//! - [`eligible`]    the combined per-failure eligibility check
//!
//! ## Defaults
//! - `KindSet` in [`Settings::default`](crate::Settings) covers the built-in
//!   `STANDARD` kind and everything beneath it.
//! - `Pattern::default()` matches everything.
//! - `SleepPolicy::default()` is a fixed one-second delay.

mod matcher;
mod sleep;

pub use matcher::{eligible, KindSet, Pattern};
pub use sleep::{SleepFn, SleepPolicy};
