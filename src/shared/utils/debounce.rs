//! Cancellable delayed tasks
//!
//! A [`Debouncer`] hands out futures that wait for a quiet period and then run
//! some work. Scheduling again aborts the previous future wherever it is, in
//! the timer or halfway through the work. The caller spawns the returned
//! future on whatever executor it uses (Dioxus `spawn`, tokio, a test).

use futures::future::{AbortHandle, Abortable, Either, FutureExt};
use std::future::Future;
use std::time::Duration;

/// Platform timer: gloo on WASM, tokio everywhere else
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Run `work`, giving up after `limit`. `None` means the limit was hit.
pub async fn with_timeout<F: Future>(work: F, limit: Duration) -> Option<F::Output> {
    let work = std::pin::pin!(work);
    let timer = std::pin::pin!(sleep(limit));

    match futures::future::select(work, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

/// Holds the abort handle of the most recently scheduled task.
///
/// Dropping the debouncer aborts whatever is still outstanding.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Abort the previous task and return a new one that runs `work` once
    /// the delay has elapsed. Resolves immediately if aborted later.
    pub fn schedule<F>(&mut self, work: F) -> impl Future<Output = ()> + 'static + use<F>
    where
        F: Future<Output = ()> + 'static,
    {
        self.cancel();

        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);

        let delay = self.delay;
        Abortable::new(
            async move {
                sleep(delay).await;
                work.await;
            },
            registration,
        )
        .map(|_| ())
    }

    /// Abort the outstanding task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let ran = Rc::new(Cell::new(false));

        let flag = ran.clone();
        let start = Instant::now();
        debouncer.schedule(async move { flag.set(true) }).await;

        assert!(ran.get());
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_aborts_previous() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let runs = Rc::new(Cell::new(0));

        let first_runs = runs.clone();
        let first = debouncer.schedule(async move { first_runs.set(first_runs.get() + 10) });
        let second_runs = runs.clone();
        let second = debouncer.schedule(async move { second_runs.set(second_runs.get() + 1) });

        futures::join!(first, second);
        assert_eq!(runs.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_work_in_progress() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let finished = Rc::new(Cell::new(false));

        let flag = finished.clone();
        let task = debouncer.schedule(async move {
            sleep(Duration::from_secs(5)).await;
            flag.set(true);
        });

        let canceller = async {
            sleep(Duration::from_millis(100)).await;
            debouncer.cancel();
        };

        futures::join!(task, canceller);
        assert!(!finished.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let ran = Rc::new(Cell::new(false));

        let flag = ran.clone();
        let task = debouncer.schedule(async move { flag.set(true) });
        drop(debouncer);

        task.await;
        assert!(!ran.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_timeout() {
        let fast = with_timeout(async { 7 }, Duration::from_millis(50)).await;
        assert_eq!(fast, Some(7));

        let slow = with_timeout(
            async {
                sleep(Duration::from_secs(1)).await;
                7
            },
            Duration::from_millis(50),
        )
        .await;
        assert_eq!(slow, None);
    }
}
