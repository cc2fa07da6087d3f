//! # Retrier: one owning context and its retry loop.
//!
//! A [`Retrier`] owns the pieces a retry loop needs:
//! - the stored default [`Settings`] (merged with per-call overrides),
//! - the nesting marker slot,
//! - the injected [`Sleeper`].
//!
//! ## Loop
//! ```text
//! run(overrides, work)
//!   ├─► validate + merge overrides into a throwaway copy
//!   ├─► tries == 0 → Ok(None), nothing else happens
//!   ├─► nesting check (marker already set → Err(Nested))
//!   └─► loop {
//!         ├─► logger(task, index, previous)      (if configured)
//!         ├─► work(Attempt { index, previous })
//!         ├─► Ok(value)            → Ok(Some(value))
//!         ├─► Err, not eligible    → Err(Failed), unchanged
//!         ├─► Err, budget spent    → Err(Failed), unchanged
//!         └─► Err, retryable       → sleep(delay(index)), index += 1
//!       }
//! ```
//!
//! ## Rules
//! - Attempts run **strictly sequentially**; attempt `i + 1` never starts
//!   before attempt `i`'s failure is classified and logged and the backoff
//!   for it has fully elapsed.
//! - Per-call overrides never persist: only [`Retrier::configure`] writes
//!   the stored defaults.
//! - The nesting marker clears on **every** exit path (the scope is a drop
//!   guard), so a later independent loop on the same context is unaffected.
//! - Terminal failures propagate unchanged; the engine never wraps, swallows,
//!   or retries its own control-flow errors.

use std::future::Future;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::core::nesting::{CallSite, NestSlot};
use crate::core::runner::{run_once, Attempt};
use crate::core::sleeper::{Sleeper, TokioSleeper};
use crate::error::RetryError;
use crate::failures::Outcome;
use crate::options::{IntoOverrides, Settings};
use crate::policies::eligible;

/// An owning context: stored defaults, a nesting marker slot, and a sleeper.
///
/// Contexts are independent; configuring one never affects another. State
/// sits behind a mutex so a nested `run` can share `&self`, but a single
/// context is meant to be driven from one thread of control.
///
/// ## Example
/// ```rust
/// use retrier::{kind, Failure, Overrides, RecordingSleeper, Retrier};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), retrier::RetryError> {
/// let sleeper = RecordingSleeper::new();
/// let retrier = Retrier::with_sleeper(sleeper.clone());
///
/// let value = retrier
///     .run(Overrides::new().tries(3), |attempt| async move {
///         if attempt.index < 1 {
///             return Err(Failure::new(&kind::IO, "connection reset"));
///         }
///         Ok(attempt.index)
///     })
///     .await?;
///
/// assert_eq!(value, Some(1));
/// assert_eq!(sleeper.slept().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Retrier {
    defaults: Mutex<Settings>,
    nest: Arc<NestSlot>,
    sleeper: Arc<dyn Sleeper>,
}

impl Retrier {
    /// Creates a context with built-in defaults and the tokio sleeper.
    pub fn new() -> Self {
        Self::with_sleeper(TokioSleeper)
    }

    /// Creates a context that waits through the given sleeper.
    pub fn with_sleeper(sleeper: impl Sleeper + 'static) -> Self {
        Self {
            defaults: Mutex::new(Settings::default()),
            nest: Arc::new(NestSlot::default()),
            sleeper: Arc::new(sleeper),
        }
    }

    /// Returns a snapshot of the stored defaults.
    ///
    /// The snapshot is a copy: mutating it never touches the stored state.
    pub fn options(&self) -> Settings {
        self.defaults
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Validates `overrides` and merges them into the stored defaults,
    /// returning the merged snapshot.
    ///
    /// On [`RetryError::InvalidOptions`] the stored defaults are untouched:
    /// validation completes before any merge.
    pub fn configure<O: IntoOverrides>(&self, overrides: O) -> Result<Settings, RetryError> {
        let overrides = overrides.into_overrides()?;
        let mut defaults = self.defaults.lock().unwrap_or_else(|e| e.into_inner());
        let merged = defaults.merged(&overrides);
        *defaults = merged.clone();
        Ok(merged)
    }

    /// Restores the stored defaults to the built-ins.
    pub fn reset(&self) {
        *self.defaults.lock().unwrap_or_else(|e| e.into_inner()) = Settings::default();
    }

    /// Runs `work` under the resolved policy until it succeeds, the attempt
    /// budget is spent, or a failure outside the policy occurs.
    ///
    /// Returns `Ok(Some(value))` on success, `Ok(None)` when the resolved
    /// `tries` is zero (the work is never invoked, nothing is logged), and
    /// `Err` otherwise:
    /// - [`RetryError::InvalidOptions`] — `overrides` carried an
    ///   unrecognized key or malformed value; checked before any attempt.
    /// - [`RetryError::Nested`] — a loop is already active on this context;
    ///   checked before the first attempt.
    /// - [`RetryError::Failed`] — the work's terminal [`Failure`], unchanged.
    ///
    /// [`Failure`]: crate::Failure
    #[track_caller]
    pub fn run<'a, T, O, F, Fut>(
        &'a self,
        overrides: O,
        work: F,
    ) -> impl Future<Output = Result<Option<T>, RetryError>> + 'a
    where
        T: 'a,
        O: IntoOverrides + 'a,
        F: FnMut(Attempt) -> Fut + 'a,
        Fut: Future<Output = Outcome<T>> + 'a,
    {
        let site = CallSite::from_location(Location::caller());
        self.run_from(site, overrides, work)
    }

    async fn run_from<T, O, F, Fut>(
        &self,
        site: CallSite,
        overrides: O,
        mut work: F,
    ) -> Result<Option<T>, RetryError>
    where
        O: IntoOverrides,
        F: FnMut(Attempt) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        let overrides = overrides.into_overrides()?;
        let settings = self.options().merged(&overrides);
        if settings.tries < 1 {
            return Ok(None);
        }

        let _scope = NestSlot::enter(&self.nest, site, settings.detect_nesting)?;

        let mut previous = None;
        let mut index: u32 = 0;
        loop {
            match run_once(&mut work, &settings, index, previous.clone()).await {
                Ok(value) => return Ok(Some(value)),
                Err(failure) => {
                    if !eligible(&failure, &settings.on, &settings.matching) {
                        debug!(
                            kind = failure.kind().name(),
                            attempt = index,
                            "failure outside retry policy, propagating"
                        );
                        return Err(failure.into());
                    }
                    if index + 1 >= settings.tries {
                        debug!(
                            kind = failure.kind().name(),
                            attempt = index,
                            tries = settings.tries,
                            "attempt budget spent, propagating"
                        );
                        return Err(failure.into());
                    }

                    let delay = settings.sleep.delay(index);
                    debug!(
                        kind = failure.kind().name(),
                        attempt = index,
                        delay = ?delay,
                        "attempt failed, retrying"
                    );
                    previous = Some(failure);
                    if let Some(delay) = delay {
                        self.sleeper.sleep(delay).await;
                    }
                    index += 1;
                }
            }
        }
    }
}

impl Default for Retrier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Retrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retrier")
            .field("defaults", &self.options())
            .finish_non_exhaustive()
    }
}
