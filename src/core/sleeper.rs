//! # The injected wait primitive.
//!
//! The engine never calls a timer directly: every backoff wait goes through
//! a [`Sleeper`]. The default [`TokioSleeper`] delegates to
//! `tokio::time::sleep`; [`InstantSleeper`] returns immediately; and
//! [`RecordingSleeper`] captures the requested durations so tests can assert
//! on them without waiting.
//!
//! ```rust
//! use std::time::Duration;
//! use retrier::{RecordingSleeper, Sleeper};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sleeper = RecordingSleeper::new();
//! sleeper.sleep(Duration::from_millis(250)).await;
//! assert_eq!(sleeper.slept(), vec![Duration::from_millis(250)]);
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

/// Performs the wait between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Completes once `duration` has elapsed (by whatever clock the
    /// implementation uses).
    async fn sleep(&self, duration: Duration);
}

/// Waits on the tokio timer. The default sleeper.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately without waiting.
pub struct InstantSleeper;

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Records every requested duration and returns immediately.
///
/// Clones share the same record, so a test can keep one handle and hand the
/// other to [`Retrier::with_sleeper`](crate::Retrier::with_sleeper).
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The durations requested so far, in order.
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// How many times the engine asked to wait.
    pub fn count(&self) -> usize {
        self.slept.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(duration);
    }
}
