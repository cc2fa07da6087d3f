//! # retrier
//!
//! **Retrier** is a policy-driven retry-execution library for Rust.
//!
//! Wrap any fallible operation in a retry loop without duplicating retry
//! logic: a policy says which failure kinds are retryable, how many attempts
//! to allow, which messages qualify, and how long to wait between attempts.
//! The loop runs the work, classifies each failure, and either retries or
//! propagates the failure unchanged.
//!
//! ## Architecture
//! ```text
//!              ┌────────────────────────────────────────────────┐
//!              │  Retrier (owning context)                      │
//!              │  - Settings (stored defaults, mergeable)       │
//!              │  - NestSlot (one nesting marker)               │
//!              │  - Sleeper  (injected wait primitive)          │
//!              └───────┬────────────────────────────────────────┘
//!                      ▼
//! run(overrides, work)
//!   ├─► validate overrides ── unknown key ──► Err(InvalidOptions)
//!   ├─► merge into throwaway copy of the stored defaults
//!   ├─► tries == 0 ──► Ok(None)  (work never invoked)
//!   ├─► nesting check ── marker active ──► Err(Nested)
//!   └─► loop {
//!         ├─► Notify hook (task, attempt index, previous failure)
//!         ├─► work(Attempt { index, previous })
//!         │       ├─ Ok(value)  ──► Ok(Some(value))
//!         │       └─ Err(Failure)
//!         │             ├─ kind not covered or message not matching
//!         │             │       ──► Err(Failed), unchanged
//!         │             ├─ attempt budget spent
//!         │             │       ──► Err(Failed), unchanged
//!         │             └─ retryable ──► Sleeper.sleep(SleepPolicy.delay(i))
//!         │                              then next attempt
//!         └─ marker cleared on every exit path
//!       }
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                  |
//! |-----------------|----------------------------------------------------------|-------------------------------------|
//! | **Policies**    | Which failures retry, and the delay between attempts.    | [`KindSet`], [`Pattern`], [`SleepPolicy`] |
//! | **Failures**    | Kind-tagged failure objects with a supertype relation.   | [`Failure`], [`FailureKind`], [`kind`] |
//! | **Configuration** | Stored defaults plus validated per-call overrides.     | [`Settings`], [`Overrides`], [`OptValue`] |
//! | **Observation** | Pre-attempt logging hook and the default text logger.    | [`Notify`], [`LogNotify`]           |
//! | **Injection**   | Pluggable wait primitive (real, instant, recording).     | [`Sleeper`], [`TokioSleeper`], [`RecordingSleeper`] |
//! | **Errors**      | Typed errors; work failures propagate unchanged.         | [`RetryError`]                      |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retrier::{kind, Failure, Overrides, Retrier};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), retrier::RetryError> {
//!     let retrier = Retrier::new();
//!
//!     let greeting = retrier
//!         .run(
//!             Overrides::new().tries(3).sleep(Duration::from_millis(50)),
//!             |attempt| async move {
//!                 if attempt.index == 0 {
//!                     return Err(Failure::new(&kind::IO, "connection reset"));
//!                 }
//!                 Ok("hello")
//!             },
//!         )
//!         .await?;
//!
//!     assert_eq!(greeting, Some("hello"));
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//! The engine is a purely local, sequential control-flow helper: no circuit
//! breaking, no jitter, no cross-process budgets, no built-in cancellation
//! or timeout. Attempts never overlap; a host wanting cancellation makes
//! the work function cooperative and drops the `run` future.

mod core;
mod error;
mod failures;
mod observers;
mod options;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{
    Attempt, CallSite, InstantSleeper, RecordingSleeper, Retrier, Sleeper, TokioSleeper,
};
pub use error::RetryError;
pub use failures::{kind, Failure, FailureKind, Outcome};
pub use observers::{LogNotify, Notify, NotifyRef};
pub use options::{IntoOverrides, OptValue, Overrides, Setting, Settings};
pub use policies::{eligible, KindSet, Pattern, SleepFn, SleepPolicy};
