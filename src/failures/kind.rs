//! # Failure kinds: named categories with a declared supertype.
//!
//! A [`FailureKind`] classifies a failure for retry-eligibility checks.
//! Kinds form a tree: each kind may declare a parent, and a kind is covered
//! by any of its ancestors. Coverage is resolved by an ancestor walk, so a
//! policy registered for a broad kind automatically covers every kind
//! declared beneath it.
//!
//! Kinds are meant to be declared as `static` items; identity is by
//! reference, not by name.
//!
//! ## Built-in tree
//! ```text
//! FAILURE                broadest kind; NOT covered by the defaults
//! └── STANDARD           default retry coverage
//!     ├── RUNTIME
//!     └── IO
//!         └── TIMEOUT
//! ```
//!
//! ## Example
//! ```rust
//! use retrier::kind;
//!
//! assert!(kind::TIMEOUT.is_within(&kind::IO));
//! assert!(kind::TIMEOUT.is_within(&kind::STANDARD));
//! assert!(!kind::IO.is_within(&kind::TIMEOUT));
//! ```
//!
//! Callers extend the tree by declaring their own statics:
//! ```rust
//! use retrier::{kind, FailureKind};
//!
//! static TRANSPORT: FailureKind = FailureKind::within("transport", &kind::IO);
//!
//! assert!(TRANSPORT.is_within(&kind::STANDARD));
//! ```

use std::fmt;

/// A failure category with an optional declared supertype.
///
/// Two kinds are equal only if they are the same `static` item; a kind with
/// the same name declared twice is two distinct kinds.
pub struct FailureKind {
    name: &'static str,
    parent: Option<&'static FailureKind>,
}

impl FailureKind {
    /// Declares a kind with no supertype.
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Declares a kind beneath `parent`.
    pub const fn within(name: &'static str, parent: &'static FailureKind) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// Returns the kind's name (stable, snake_case; used by the default logger).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared supertype, if any.
    pub fn parent(&self) -> Option<&'static FailureKind> {
        self.parent
    }

    /// Walks the ancestor chain: true if `self` is `ancestor` or is declared
    /// (transitively) beneath it.
    pub fn is_within(&self, ancestor: &FailureKind) -> bool {
        let mut current: Option<&FailureKind> = Some(self);
        while let Some(kind) = current {
            if std::ptr::eq(kind, ancestor) {
                return true;
            }
            current = kind.parent;
        }
        false
    }
}

impl PartialEq for FailureKind {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for FailureKind {}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FailureKind({})", self.name)
    }
}

/// Broadest built-in kind. Not covered by the default policy; reserve it for
/// failures that should normally propagate.
pub static FAILURE: FailureKind = FailureKind::root("failure");

/// Default retry coverage: the policy shipped with [`Settings::default`]
/// covers this kind and everything beneath it.
///
/// [`Settings::default`]: crate::Settings
pub static STANDARD: FailureKind = FailureKind::within("standard", &FAILURE);

/// Generic runtime failure.
pub static RUNTIME: FailureKind = FailureKind::within("runtime", &STANDARD);

/// I/O failure.
pub static IO: FailureKind = FailureKind::within("io", &STANDARD);

/// An I/O deadline expired.
pub static TIMEOUT: FailureKind = FailureKind::within("timeout", &IO);
