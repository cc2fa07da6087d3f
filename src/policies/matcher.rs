//! # Failure matching: which failures are worth retrying.
//!
//! A failure is eligible for retry only when both hold:
//! - its kind is covered by the configured [`KindSet`] (ancestor walk, so a
//!   subkind of a configured kind counts), and
//! - its message matches the configured [`Pattern`].
//!
//! An empty [`KindSet`] covers nothing. The default [`Pattern`] matches
//! everything; once a pattern is configured, a failure whose message does
//! not match propagates on its first occurrence regardless of kind.

use regex::Regex;

use crate::failures::{Failure, FailureKind};

/// Ordered, deduplicated set of failure kinds a policy covers.
#[derive(Clone, Debug, Default)]
pub struct KindSet(Vec<&'static FailureKind>);

impl KindSet {
    /// The empty set: covers no failure at all.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a set from the given kinds, keeping first-seen order and
    /// dropping duplicates.
    pub fn of(kinds: impl IntoIterator<Item = &'static FailureKind>) -> Self {
        let mut set: Vec<&'static FailureKind> = Vec::new();
        for kind in kinds {
            if !set.iter().any(|existing| std::ptr::eq(*existing, kind)) {
                set.push(kind);
            }
        }
        Self(set)
    }

    /// True if `kind` is one of the set's members or is declared beneath one.
    pub fn covers(&self, kind: &FailureKind) -> bool {
        self.0.iter().any(|member| kind.is_within(member))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FailureKind> + '_ {
        self.0.iter().copied()
    }
}

impl From<&'static FailureKind> for KindSet {
    fn from(kind: &'static FailureKind) -> Self {
        Self(vec![kind])
    }
}

impl From<Vec<&'static FailureKind>> for KindSet {
    fn from(kinds: Vec<&'static FailureKind>) -> Self {
        Self::of(kinds)
    }
}

impl<const N: usize> From<[&'static FailureKind; N]> for KindSet {
    fn from(kinds: [&'static FailureKind; N]) -> Self {
        Self::of(kinds)
    }
}

impl FromIterator<&'static FailureKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = &'static FailureKind>>(iter: I) -> Self {
        Self::of(iter)
    }
}

/// Message pattern applied to a failure's text.
///
/// The default pattern matches everything; a configured pattern is a
/// compiled regular expression tested with `is_match` semantics.
///
/// ## Example
/// ```rust
/// use retrier::Pattern;
///
/// let p = Pattern::new("IO timeout").unwrap();
/// assert!(p.matches("yo, IO timeout!"));
/// assert!(!p.matches("name resolution failed"));
/// assert!(Pattern::match_all().matches("anything"));
/// ```
#[derive(Clone, Default)]
pub struct Pattern {
    regex: Option<Regex>,
}

impl Pattern {
    /// Compiles an expression into a pattern.
    pub fn new(expr: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Some(Regex::new(expr)?),
        })
    }

    /// The match-everything pattern (the built-in default).
    pub fn match_all() -> Self {
        Self { regex: None }
    }

    /// True if the message satisfies the pattern.
    pub fn matches(&self, message: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(message),
            None => true,
        }
    }

    /// The pattern's source expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map(|r| r.as_str()).unwrap_or(".*")
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({:?})", self.as_str())
    }
}

/// The eligibility check the retry loop applies to every failed attempt.
///
/// Returns true only when `on` covers the failure's kind and `matching`
/// accepts its message.
pub fn eligible(failure: &Failure, on: &KindSet, matching: &Pattern) -> bool {
    on.covers(failure.kind()) && matching.matches(failure.message())
}
