//! # Nesting detection: one marker slot per owning context.
//!
//! A detecting retry loop records a [`CallSite`] marker on its context for
//! its whole dynamic extent. Starting any new loop on a context whose
//! marker is set fails with [`RetryError::Nested`] carrying the site that
//! opened the still-active loop. The new loop's own detection flag does
//! not exempt it: detection is about the caller-context stack, not about
//! whether the immediately enclosing loop opted in.
//!
//! The marker is held by a drop guard, so it clears on every exit path:
//! success, exhaustion, propagation, and unwind.

use std::fmt;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use crate::error::RetryError;

/// Identity of the source location that started a retry loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    pub(crate) fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The context's marker slot.
#[derive(Debug, Default)]
pub(crate) struct NestSlot {
    marker: Mutex<Option<CallSite>>,
}

impl NestSlot {
    /// Checks the slot and, for a detecting loop, records `site`.
    ///
    /// Fails if a marker is already present, whatever `detect` says. The
    /// returned scope clears the marker on drop only if this call recorded
    /// one.
    pub(crate) fn enter(
        slot: &Arc<Self>,
        site: CallSite,
        detect: bool,
    ) -> Result<NestScope, RetryError> {
        let mut marker = slot.marker.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(outer) = *marker {
            return Err(RetryError::Nested { site: outer });
        }
        if detect {
            *marker = Some(site);
            Ok(NestScope {
                slot: Some(Arc::clone(slot)),
            })
        } else {
            Ok(NestScope { slot: None })
        }
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<CallSite> {
        *self.marker.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Drop guard for a loop's marker. Held across the loop's whole extent.
#[derive(Debug)]
pub(crate) struct NestScope {
    slot: Option<Arc<NestSlot>>,
}

impl Drop for NestScope {
    fn drop(&mut self) {
        if let Some(slot) = &self.slot {
            *slot.marker.lock().unwrap_or_else(|e| e.into_inner()) = None;
        }
    }
}
