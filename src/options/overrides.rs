//! # Per-call and default-setting overrides, with strict key validation.
//!
//! [`Overrides`] is an ordered list of [`Setting`] values, one variant per
//! recognized option key. Two construction paths exist:
//!
//! - **Typed builder** ([`Overrides::new`] + methods): cannot express an
//!   unrecognized key, so it never fails.
//! - **Dynamic pairs** ([`Overrides::from_pairs`] or passing a `(key, value)`
//!   list straight to [`Retrier::run`](crate::Retrier::run) /
//!   [`Retrier::configure`](crate::Retrier::configure)): every key is
//!   validated, case-sensitively, against the recognized set before any
//!   merge happens. An unknown key, a value of the wrong shape, or an
//!   uncompilable `matching` expression fails with
//!   [`RetryError::InvalidOptions`] and leaves all stored state untouched.
//!
//! ## Recognized keys
//! | key              | value                                     |
//! |------------------|-------------------------------------------|
//! | `tries`          | unsigned integer (`0` = never run)        |
//! | `on`             | set of failure kinds                      |
//! | `sleep`          | duration, sleep function, or no-sleep     |
//! | `matching`       | pattern string (compiled as a regex)      |
//! | `detect_nesting` | boolean                                   |
//! | `task`           | text label, or unset                      |
//! | `logger`         | a [`Notify`](crate::Notify) hook, or unset |
//!
//! ## Example
//! ```rust
//! use retrier::{OptValue, Overrides};
//!
//! let err = Overrides::from_pairs([("max_tries", OptValue::from(3u32))]).unwrap_err();
//! assert_eq!(err.as_label(), "invalid_options");
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::RetryError;
use crate::failures::FailureKind;
use crate::observers::{Notify, NotifyRef};
use crate::policies::{KindSet, Pattern, SleepFn, SleepPolicy};

/// One override of a recognized option key.
#[derive(Clone)]
pub enum Setting {
    Tries(u32),
    On(KindSet),
    Sleep(SleepPolicy),
    Matching(Pattern),
    DetectNesting(bool),
    Task(Option<String>),
    Logger(Option<NotifyRef>),
}

impl Setting {
    /// The recognized option keys, exactly and case-sensitively.
    pub const KEYS: [&'static str; 7] = [
        "tries",
        "on",
        "sleep",
        "matching",
        "detect_nesting",
        "task",
        "logger",
    ];

    /// The key this setting overrides.
    pub fn key(&self) -> &'static str {
        match self {
            Setting::Tries(_) => "tries",
            Setting::On(_) => "on",
            Setting::Sleep(_) => "sleep",
            Setting::Matching(_) => "matching",
            Setting::DetectNesting(_) => "detect_nesting",
            Setting::Task(_) => "task",
            Setting::Logger(_) => "logger",
        }
    }

    /// Validates one `(key, value)` pair. Fails on an unrecognized key or a
    /// value whose shape does not fit the key.
    pub fn parse(key: &str, value: OptValue) -> Result<Setting, RetryError> {
        let mismatch = |expected: &str| RetryError::InvalidOptions {
            key: key.to_owned(),
            reason: format!("expected {expected}"),
        };

        match key {
            "tries" => match value {
                OptValue::Int(n) => Ok(Setting::Tries(n)),
                _ => Err(mismatch("an unsigned integer")),
            },
            "on" => match value {
                OptValue::Kinds(kinds) => Ok(Setting::On(KindSet::of(kinds))),
                _ => Err(mismatch("a set of failure kinds")),
            },
            "sleep" => match value {
                OptValue::Dur(d) => Ok(Setting::Sleep(SleepPolicy::Fixed(d))),
                OptValue::NoSleep => Ok(Setting::Sleep(SleepPolicy::None)),
                OptValue::SleepFn(f) => Ok(Setting::Sleep(SleepPolicy::Computed(f))),
                _ => Err(mismatch("a duration, a sleep function, or no-sleep")),
            },
            "matching" => match value {
                OptValue::Text(expr) => {
                    let pattern =
                        Pattern::new(&expr).map_err(|e| RetryError::InvalidOptions {
                            key: key.to_owned(),
                            reason: e.to_string(),
                        })?;
                    Ok(Setting::Matching(pattern))
                }
                _ => Err(mismatch("a pattern string")),
            },
            "detect_nesting" => match value {
                OptValue::Bool(flag) => Ok(Setting::DetectNesting(flag)),
                _ => Err(mismatch("a boolean")),
            },
            "task" => match value {
                OptValue::Text(label) => Ok(Setting::Task(Some(label))),
                OptValue::Unset => Ok(Setting::Task(None)),
                _ => Err(mismatch("a text label or unset")),
            },
            "logger" => match value {
                OptValue::Notifier(hook) => Ok(Setting::Logger(Some(hook))),
                OptValue::Unset => Ok(Setting::Logger(None)),
                _ => Err(mismatch("a logger or unset")),
            },
            other => Err(RetryError::InvalidOptions {
                key: other.to_owned(),
                reason: "unrecognized option key".to_owned(),
            }),
        }
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Tries(n) => f.debug_tuple("Tries").field(n).finish(),
            Setting::On(set) => f.debug_tuple("On").field(set).finish(),
            Setting::Sleep(policy) => f.debug_tuple("Sleep").field(policy).finish(),
            Setting::Matching(pattern) => f.debug_tuple("Matching").field(pattern).finish(),
            Setting::DetectNesting(flag) => f.debug_tuple("DetectNesting").field(flag).finish(),
            Setting::Task(label) => f.debug_tuple("Task").field(label).finish(),
            Setting::Logger(hook) => f
                .debug_tuple("Logger")
                .field(&hook.as_ref().map(|_| "<logger>"))
                .finish(),
        }
    }
}

/// A dynamically-typed option value for the `(key, value)` construction path.
#[derive(Clone)]
pub enum OptValue {
    Int(u32),
    Bool(bool),
    Text(String),
    Dur(Duration),
    Kinds(Vec<&'static FailureKind>),
    NoSleep,
    SleepFn(SleepFn),
    Notifier(NotifyRef),
    Unset,
}

impl OptValue {
    /// Wraps a delay function for the `sleep` key.
    pub fn sleep_fn(f: impl Fn(u32) -> Duration + Send + Sync + 'static) -> Self {
        OptValue::SleepFn(Arc::new(f))
    }

    /// Wraps a logging hook for the `logger` key.
    pub fn logger(hook: impl Notify + 'static) -> Self {
        OptValue::Notifier(Arc::new(hook))
    }
}

impl From<u32> for OptValue {
    fn from(n: u32) -> Self {
        OptValue::Int(n)
    }
}

impl From<bool> for OptValue {
    fn from(flag: bool) -> Self {
        OptValue::Bool(flag)
    }
}

impl From<&str> for OptValue {
    fn from(text: &str) -> Self {
        OptValue::Text(text.to_owned())
    }
}

impl From<String> for OptValue {
    fn from(text: String) -> Self {
        OptValue::Text(text)
    }
}

impl From<Duration> for OptValue {
    fn from(d: Duration) -> Self {
        OptValue::Dur(d)
    }
}

impl From<&'static FailureKind> for OptValue {
    fn from(kind: &'static FailureKind) -> Self {
        OptValue::Kinds(vec![kind])
    }
}

impl From<Vec<&'static FailureKind>> for OptValue {
    fn from(kinds: Vec<&'static FailureKind>) -> Self {
        OptValue::Kinds(kinds)
    }
}

impl fmt::Debug for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            OptValue::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            OptValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            OptValue::Dur(d) => f.debug_tuple("Dur").field(d).finish(),
            OptValue::Kinds(kinds) => f.debug_tuple("Kinds").field(kinds).finish(),
            OptValue::NoSleep => f.write_str("NoSleep"),
            OptValue::SleepFn(_) => f.write_str("SleepFn(<fn>)"),
            OptValue::Notifier(_) => f.write_str("Notifier(<logger>)"),
            OptValue::Unset => f.write_str("Unset"),
        }
    }
}

/// An ordered list of option overrides. Later entries win over earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    settings: Vec<Setting>,
}

impl Overrides {
    /// No overrides: resolving against stored defaults returns them as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a list of `(key, value)` pairs. Fails on the first
    /// unrecognized key or malformed value, before anything is merged.
    pub fn from_pairs<K: AsRef<str>>(
        pairs: impl IntoIterator<Item = (K, OptValue)>,
    ) -> Result<Self, RetryError> {
        let mut overrides = Self::new();
        for (key, value) in pairs {
            overrides.settings.push(Setting::parse(key.as_ref(), value)?);
        }
        Ok(overrides)
    }

    /// Sets the maximum attempt count (`0` = never run the work).
    pub fn tries(mut self, tries: u32) -> Self {
        self.settings.push(Setting::Tries(tries));
        self
    }

    /// Sets the failure kinds eligible for retry.
    pub fn on(mut self, kinds: impl Into<KindSet>) -> Self {
        self.settings.push(Setting::On(kinds.into()));
        self
    }

    /// Sets the backoff policy (a `Duration` converts to a fixed delay).
    pub fn sleep(mut self, policy: impl Into<SleepPolicy>) -> Self {
        self.settings.push(Setting::Sleep(policy.into()));
        self
    }

    /// Disables waiting between attempts.
    pub fn no_sleep(mut self) -> Self {
        self.settings.push(Setting::Sleep(SleepPolicy::None));
        self
    }

    /// Sets a computed backoff: `f` receives the zero-based index of the
    /// attempt that just failed.
    pub fn sleep_fn(mut self, f: impl Fn(u32) -> Duration + Send + Sync + 'static) -> Self {
        self.settings.push(Setting::Sleep(SleepPolicy::computed(f)));
        self
    }

    /// Sets the message pattern a failure must match to be retried.
    pub fn matching(mut self, pattern: Pattern) -> Self {
        self.settings.push(Setting::Matching(pattern));
        self
    }

    /// Enables or disables nesting detection for this loop.
    pub fn detect_nesting(mut self, detect: bool) -> Self {
        self.settings.push(Setting::DetectNesting(detect));
        self
    }

    /// Sets the task label passed to the logger.
    pub fn task(mut self, label: impl Into<String>) -> Self {
        self.settings.push(Setting::Task(Some(label.into())));
        self
    }

    /// Installs a pre-attempt logging hook.
    pub fn logger(mut self, hook: impl Notify + 'static) -> Self {
        self.settings.push(Setting::Logger(Some(Arc::new(hook))));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub(crate) fn settings(&self) -> &[Setting] {
        &self.settings
    }
}

/// Anything [`Retrier::run`](crate::Retrier::run) and
/// [`Retrier::configure`](crate::Retrier::configure) accept as overrides.
///
/// `()` means "no overrides"; `(key, value)` pair lists go through the same
/// validation as [`Overrides::from_pairs`].
pub trait IntoOverrides {
    fn into_overrides(self) -> Result<Overrides, RetryError>;
}

impl IntoOverrides for Overrides {
    fn into_overrides(self) -> Result<Overrides, RetryError> {
        Ok(self)
    }
}

impl IntoOverrides for () {
    fn into_overrides(self) -> Result<Overrides, RetryError> {
        Ok(Overrides::new())
    }
}

impl<K: AsRef<str>, const N: usize> IntoOverrides for [(K, OptValue); N] {
    fn into_overrides(self) -> Result<Overrides, RetryError> {
        Overrides::from_pairs(self)
    }
}

impl<K: AsRef<str>> IntoOverrides for Vec<(K, OptValue)> {
    fn into_overrides(self) -> Result<Overrides, RetryError> {
        Overrides::from_pairs(self)
    }
}
