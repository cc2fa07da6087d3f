//! Configuration: resolved settings and the overrides that produce them.
//!
//! ## Contents
//! - [`Settings`]      one loop's fully-resolved configuration
//! - [`Overrides`]     ordered option overrides (typed builder or validated pairs)
//! - [`Setting`]       a single recognized-key override
//! - [`OptValue`]      dynamically-typed values for the pair path
//! - [`IntoOverrides`] what the entry points accept as overrides
//!
//! ## Resolution flow
//! ```text
//! Retrier::configure(overrides)   validate → merge into stored defaults
//! Retrier::run(overrides, work)   validate → merge into a throwaway copy
//! Retrier::options()              snapshot of stored defaults
//! Retrier::reset()                stored defaults := built-ins
//! ```

mod overrides;
mod settings;

pub use overrides::{IntoOverrides, OptValue, Overrides, Setting};
pub use settings::Settings;
