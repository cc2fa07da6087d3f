//! Failure representation: kind tags with a supertype relation, and the
//! failure object work functions return.
//!
//! ## Contents
//! - [`FailureKind`] a named category with a declared supertype
//! - [`Failure`]     a kind tag plus message, observed by the engine
//! - [`Outcome`]     the per-attempt success/failure union

mod failure;
pub mod kind;

pub use failure::{Failure, Outcome};
pub use kind::FailureKind;
