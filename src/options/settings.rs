//! # Resolved retry configuration.
//!
//! [`Settings`] is the fully-resolved option set one retry loop runs under:
//! the owning context's stored defaults with any per-call overrides merged
//! in. Merging always happens on a copy; the stored defaults are only
//! updated through [`Retrier::configure`](crate::Retrier::configure).
//!
//! ## Built-in defaults
//! - `tries = 2`
//! - `on` covers the built-in `STANDARD` kind (and everything beneath it)
//! - `sleep` is a fixed one-second delay
//! - `matching` matches everything
//! - `detect_nesting = false`
//! - `task = None`, `logger = None`
//!
//! ## Example
//! ```rust
//! use retrier::Settings;
//!
//! let defaults = Settings::default();
//! assert_eq!(defaults.tries, 2);
//! assert!(defaults.matching.matches("anything at all"));
//! assert!(!defaults.detect_nesting);
//! ```

use std::fmt;

use crate::failures::kind;
use crate::observers::NotifyRef;
use crate::options::overrides::{Overrides, Setting};
use crate::policies::{KindSet, Pattern, SleepPolicy};

/// One retry loop's resolved configuration.
#[derive(Clone)]
pub struct Settings {
    /// Maximum number of attempts. `0` means the work is never invoked.
    pub tries: u32,
    /// Failure kinds eligible for retry. Empty covers nothing.
    pub on: KindSet,
    /// Backoff delay resolution between attempts.
    pub sleep: SleepPolicy,
    /// Message pattern a failure must match to be retried.
    pub matching: Pattern,
    /// Whether starting this loop records a nesting marker on the context.
    pub detect_nesting: bool,
    /// Opaque label passed to the logger.
    pub task: Option<String>,
    /// Pre-attempt logging hook. `None` disables attempt logging.
    pub logger: Option<NotifyRef>,
}

impl Settings {
    /// Returns a copy of `self` with each override applied in order.
    pub(crate) fn merged(&self, overrides: &Overrides) -> Settings {
        let mut out = self.clone();
        for setting in overrides.settings() {
            out.apply(setting);
        }
        out
    }

    fn apply(&mut self, setting: &Setting) {
        match setting {
            Setting::Tries(n) => self.tries = *n,
            Setting::On(set) => self.on = set.clone(),
            Setting::Sleep(policy) => self.sleep = policy.clone(),
            Setting::Matching(pattern) => self.matching = pattern.clone(),
            Setting::DetectNesting(flag) => self.detect_nesting = *flag,
            Setting::Task(label) => self.task = label.clone(),
            Setting::Logger(hook) => self.logger = hook.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tries: 2,
            on: KindSet::from(&kind::STANDARD),
            sleep: SleepPolicy::default(),
            matching: Pattern::match_all(),
            detect_nesting: false,
            task: None,
            logger: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("tries", &self.tries)
            .field("on", &self.on)
            .field("sleep", &self.sleep)
            .field("matching", &self.matching)
            .field("detect_nesting", &self.detect_nesting)
            .field("task", &self.task)
            .field("logger", &self.logger.as_ref().map(|_| "<logger>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults_cover_standard_but_not_the_broadest_kind() {
        let defaults = Settings::default();
        assert!(defaults.on.covers(&kind::STANDARD));
        assert!(defaults.on.covers(&kind::RUNTIME));
        assert!(defaults.on.covers(&kind::TIMEOUT));
        assert!(!defaults.on.covers(&kind::FAILURE));
    }

    #[test]
    fn defaults_match_the_documented_contract() {
        let defaults = Settings::default();
        assert_eq!(defaults.tries, 2);
        assert_eq!(defaults.sleep.delay(0), Some(Duration::from_secs(1)));
        assert!(defaults.matching.matches(""));
        assert!(!defaults.detect_nesting);
        assert!(defaults.task.is_none());
        assert!(defaults.logger.is_none());
    }

    #[test]
    fn merged_applies_overrides_to_a_copy() {
        let defaults = Settings::default();
        let merged = defaults.merged(&Overrides::new().tries(7).task("merge"));
        assert_eq!(merged.tries, 7);
        assert_eq!(merged.task.as_deref(), Some("merge"));
        assert_eq!(defaults.tries, 2);
        assert!(defaults.task.is_none());
    }

    #[test]
    fn later_overrides_win() {
        let merged = Settings::default().merged(&Overrides::new().tries(3).tries(9));
        assert_eq!(merged.tries, 9);
    }
}
