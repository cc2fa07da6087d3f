//! Engine internals: the owning context, the attempt runner, nesting
//! detection, and the injected sleeper.

mod nesting;
mod retrier;
mod runner;
mod sleeper;

pub use nesting::CallSite;
pub use retrier::Retrier;
pub use runner::Attempt;
pub use sleeper::{InstantSleeper, RecordingSleeper, Sleeper, TokioSleeper};
