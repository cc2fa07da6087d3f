//! # Sleep policy: how long to wait before the next attempt.
//!
//! [`SleepPolicy`] resolves the backoff delay after a failed attempt:
//! - [`SleepPolicy::None`] no wait between attempts;
//! - [`SleepPolicy::Fixed`] the same delay every time;
//! - [`SleepPolicy::Computed`] a caller-supplied function of the zero-based
//!   index of the attempt that just failed.
//!
//! The policy is a verbatim pass-through: no capping, no jitter, no
//! randomization. Whatever the caller configures is what the sleeper is
//! asked to wait.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retrier::SleepPolicy;
//!
//! let growing = SleepPolicy::computed(|n| Duration::from_secs(4u64.pow(n)));
//! assert_eq!(growing.delay(0), Some(Duration::from_secs(1)));
//! assert_eq!(growing.delay(2), Some(Duration::from_secs(16)));
//!
//! assert_eq!(SleepPolicy::None.delay(7), None);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A caller-supplied delay function over the zero-based failed-attempt index.
pub type SleepFn = Arc<dyn Fn(u32) -> Duration + Send + Sync>;

/// Backoff delay resolution for the retry loop.
#[derive(Clone)]
pub enum SleepPolicy {
    /// No wait between attempts.
    None,
    /// The same delay before every retry, regardless of attempt index.
    Fixed(Duration),
    /// Delay computed from the index of the attempt that just failed
    /// (first failure is index 0).
    Computed(SleepFn),
}

impl SleepPolicy {
    /// Wraps a delay function.
    pub fn computed(f: impl Fn(u32) -> Duration + Send + Sync + 'static) -> Self {
        SleepPolicy::Computed(Arc::new(f))
    }

    /// Resolves the wait before the next attempt, given the zero-based index
    /// of the attempt that just failed. `None` means: do not wait at all.
    pub fn delay(&self, attempt: u32) -> Option<Duration> {
        match self {
            SleepPolicy::None => None,
            SleepPolicy::Fixed(d) => Some(*d),
            SleepPolicy::Computed(f) => Some(f(attempt)),
        }
    }
}

impl Default for SleepPolicy {
    /// Returns the built-in default: a fixed one-second delay.
    fn default() -> Self {
        SleepPolicy::Fixed(Duration::from_secs(1))
    }
}

impl From<Duration> for SleepPolicy {
    fn from(d: Duration) -> Self {
        SleepPolicy::Fixed(d)
    }
}

impl fmt::Debug for SleepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleepPolicy::None => f.write_str("None"),
            SleepPolicy::Fixed(d) => f.debug_tuple("Fixed").field(d).finish(),
            SleepPolicy::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_never_waits() {
        for attempt in 0..5 {
            assert_eq!(SleepPolicy::None.delay(attempt), None);
        }
    }

    #[test]
    fn fixed_ignores_attempt_index() {
        let policy = SleepPolicy::Fixed(Duration::from_millis(300));
        for attempt in 0..5 {
            assert_eq!(policy.delay(attempt), Some(Duration::from_millis(300)));
        }
    }

    #[test]
    fn computed_receives_zero_based_index() {
        let policy = SleepPolicy::computed(|n| Duration::from_secs(4u64.pow(n)));
        let delays: Vec<_> = (0..4).map(|n| policy.delay(n).unwrap()).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(4),
                Duration::from_secs(16),
                Duration::from_secs(64),
            ]
        );
    }

    #[test]
    fn computed_is_verbatim_pass_through() {
        let policy = SleepPolicy::computed(|_| Duration::from_secs(86_400));
        assert_eq!(policy.delay(0), Some(Duration::from_secs(86_400)));
    }

    #[test]
    fn default_is_one_second_fixed() {
        assert_eq!(SleepPolicy::default().delay(3), Some(Duration::from_secs(1)));
    }

    #[test]
    fn duration_converts_to_fixed() {
        let policy: SleepPolicy = Duration::from_millis(50).into();
        assert_eq!(policy.delay(9), Some(Duration::from_millis(50)));
    }
}
