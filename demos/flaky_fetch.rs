//! # Example: flaky_fetch
//!
//! Demonstrates the basic retry loop: a simulated fetch fails twice with a
//! retryable kind, then succeeds. The default logger prints one line per
//! attempt to stderr.
//!
//! ## Flow
//! ```text
//! run(overrides, work)
//!   ├─► attempt 0 → Err(io: connection reset)  → sleep 100ms
//!   ├─► attempt 1 → Err(io: connection reset)  → sleep 100ms
//!   └─► attempt 2 → Ok("payload")
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example flaky_fetch
//! ```

use std::time::Duration;

use retrier::{kind, Failure, LogNotify, Overrides, Retrier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), retrier::RetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let retrier = Retrier::new();

    let overrides = Overrides::new()
        .tries(4)
        .on(&kind::IO)
        .sleep(Duration::from_millis(100))
        .task("fetching the payload")
        .logger(LogNotify::stderr());

    let payload = retrier
        .run(overrides, |attempt| async move {
            println!("[fetch] attempt {}", attempt.index);
            if attempt.index < 2 {
                return Err(Failure::new(&kind::IO, "connection reset"));
            }
            Ok("payload")
        })
        .await?;

    println!("[main] got {payload:?}");
    Ok(())
}
