//! # Default textual logger.
//!
//! [`LogNotify`] is a ready-made [`Notify`] for the `logger` option. It
//! writes one line per attempt to a diagnostic sink (stderr by default,
//! never stdout).
//!
//! ## Output format
//! ```text
//! refreshing the token
//! refreshing the token RETRY 1 because io
//! refreshing the token RETRY 2 because io
//! ```
//!
//! The first attempt emits the bare task label; every retry appends the
//! attempt index and the kind name of the failure that caused it. A missing
//! task label is rendered as the empty string.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::failures::Failure;
use crate::observers::notify::Notify;

/// [`Notify`] implementation that renders attempts as text lines.
///
/// Write errors on the sink are ignored; losing a log line must never fail
/// the retry loop.
pub struct LogNotify<W: Write + Send = io::Stderr> {
    sink: Mutex<W>,
}

impl LogNotify<io::Stderr> {
    /// Logs to the process's stderr stream.
    pub fn stderr() -> Self {
        Self::to(io::stderr())
    }
}

impl<W: Write + Send> LogNotify<W> {
    /// Logs to an arbitrary sink.
    pub fn to(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl<W: Write + Send> Notify for LogNotify<W> {
    fn call(&self, task: Option<&str>, attempt: u32, previous: Option<&Failure>) {
        let task = task.unwrap_or("");
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        let _ = if attempt == 0 {
            writeln!(sink, "{task}")
        } else {
            let kind = previous.map(|f| f.kind().name()).unwrap_or("unknown");
            writeln!(sink, "{task} RETRY {attempt} because {kind}")
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failures::{kind, Failure};
    use crate::options::Overrides;
    use crate::Retrier;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_attempt_emits_bare_task() {
        let buf = SharedBuf::default();
        let log = LogNotify::to(buf.clone());
        log.call(Some("setting sigmaclapper to 0"), 0, None);
        assert_eq!(buf.text(), "setting sigmaclapper to 0\n");
    }

    #[test]
    fn retries_append_index_and_kind() {
        let buf = SharedBuf::default();
        let log = LogNotify::to(buf.clone());
        let failure = Failure::new(&kind::RUNTIME, "sigmaclapper misaligned");
        log.call(Some("setting sigmaclapper to 0"), 1, Some(&failure));
        assert_eq!(
            buf.text(),
            "setting sigmaclapper to 0 RETRY 1 because runtime\n"
        );
    }

    #[test]
    fn missing_task_renders_as_empty_label() {
        let buf = SharedBuf::default();
        let log = LogNotify::to(buf.clone());
        log.call(None, 0, None);
        log.call(None, 1, Some(&Failure::standard("boom")));
        assert_eq!(buf.text(), "\n RETRY 1 because standard\n");
    }

    #[tokio::test]
    async fn engine_drives_the_default_line_formats() {
        let buf = SharedBuf::default();
        let retrier = Retrier::new();
        let overrides = Overrides::new()
            .task("setting sigmaclapper to 0")
            .no_sleep()
            .logger(LogNotify::to(buf.clone()));

        let result = retrier
            .run(overrides, |_| async { Err::<(), _>(Failure::runtime("sigmaclapper misaligned")) })
            .await;

        assert!(result.is_err());
        assert_eq!(
            buf.text(),
            "setting sigmaclapper to 0\nsetting sigmaclapper to 0 RETRY 1 because runtime\n"
        );
    }
}
