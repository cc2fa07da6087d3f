//! # Example: growing_backoff
//!
//! Demonstrates a computed sleep policy: the delay function receives the
//! zero-based index of the attempt that just failed, so `4^n` seconds over
//! five attempts waits 1s, 4s, 16s and 64s (scaled down to milliseconds
//! here to keep the demo fast), plus a custom failure-kind tree and a
//! message pattern.
//!
//! ## Run
//! ```bash
//! cargo run --example growing_backoff
//! ```

use std::time::Duration;

use retrier::{kind, Failure, FailureKind, Overrides, Pattern, Retrier};

static TRANSPORT: FailureKind = FailureKind::within("transport", &kind::IO);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let retrier = Retrier::new();

    // Only transport failures whose message mentions a timeout are retried;
    // anything else propagates on its first occurrence.
    retrier.configure(
        Overrides::new()
            .tries(5)
            .on(&kind::IO)
            .matching(Pattern::new("timed out")?)
            .sleep_fn(|n| Duration::from_millis(4u64.pow(n) * 10)),
    )?;

    let result = retrier
        .run((), |attempt| async move {
            if let Some(previous) = &attempt.previous {
                println!("[demo] attempt {} follows: {previous}", attempt.index);
            }
            if attempt.index < 3 {
                return Err(Failure::new(&TRANSPORT, "handshake timed out"));
            }
            Ok(attempt.index)
        })
        .await?;

    println!("[main] succeeded on attempt {result:?}");
    Ok(())
}
