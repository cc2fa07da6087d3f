//! Attempt observation hooks.
//!
//! ## Contents
//! - [`Notify`]    the pre-attempt logging hook trait (closures qualify)
//! - [`LogNotify`] the default textual logger (stderr or any `io::Write` sink)

mod log;
mod notify;

pub use log::LogNotify;
pub use notify::{Notify, NotifyRef};
