//! # Run a single attempt of the work function.
//!
//! One attempt is: notify the logging hook (if configured), then invoke the
//! work function with its [`Attempt`] context. The loop in
//! [`Retrier::run`](crate::Retrier::run) classifies the returned outcome.
//!
//! ## Rules
//! - The hook fires **before** the work function, on every attempt,
//!   including the first (where `previous` is `None`).
//! - The work function receives the zero-based attempt index and the
//!   failure that ended the previous attempt, and may ignore both.

use std::future::Future;

use crate::failures::{Failure, Outcome};
use crate::options::Settings;

/// Context handed to the work function for one attempt.
#[derive(Clone, Debug)]
pub struct Attempt {
    /// Zero-based index of this attempt.
    pub index: u32,
    /// The failure that ended the previous attempt (`None` on the first).
    pub previous: Option<Failure>,
}

/// Executes one attempt: pre-attempt notification, then the work itself.
pub(crate) async fn run_once<T, F, Fut>(
    work: &mut F,
    settings: &Settings,
    index: u32,
    previous: Option<Failure>,
) -> Outcome<T>
where
    F: FnMut(Attempt) -> Fut,
    Fut: Future<Output = Outcome<T>>,
{
    if let Some(logger) = &settings.logger {
        logger.call(settings.task.as_deref(), index, previous.as_ref());
    }
    work(Attempt { index, previous }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn hook_fires_before_the_work_runs() {
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let hook_order = order.clone();
        let mut settings = Settings::default();
        settings.task = Some("ordered".to_owned());
        settings.logger = Some(Arc::new(
            move |_: Option<&str>, _: u32, _: Option<&Failure>| {
                hook_order.lock().unwrap().push("logged");
            },
        ));

        let work_order = order.clone();
        let mut work = |_: Attempt| {
            let order = work_order.clone();
            async move {
                order.lock().unwrap().push("worked");
                Ok::<_, Failure>(())
            }
        };

        run_once(&mut work, &settings, 0, None).await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["logged", "worked"]);
    }

    #[tokio::test]
    async fn no_hook_means_no_notification() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut work = |attempt: Attempt| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                assert_eq!(attempt.index, 3);
                assert!(attempt.previous.is_some());
                Ok::<_, Failure>(())
            }
        };

        let previous = Some(Failure::standard("earlier"));
        run_once(&mut work, &Settings::default(), 3, previous)
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
