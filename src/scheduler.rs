// SPDX-License-Identifier: MPL-2.0
//! One-shot delayed tasks with cancellation handles.
//!
//! Every timer-driven transition in the stores (toast fade, toast removal)
//! goes through [`schedule`]. The returned [`ScheduledTask`] is kept next to
//! the state it drives so the transition can be cancelled, e.g. when a toast
//! is dismissed before its display timer fires.
//!
//! Dropping a `ScheduledTask` does **not** cancel it; only [`ScheduledTask::cancel`] does.

use crate::error::{Error, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Handle to a task scheduled with [`schedule`].
#[derive(Debug)]
pub struct ScheduledTask {
    handle: AbortHandle,
}

impl ScheduledTask {
    /// Cancels the task. Has no effect if it already ran.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns whether the task ran to completion or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Runs `task` on `runtime` once `delay` has elapsed.
pub fn schedule<F>(runtime: &Handle, delay: Duration, task: F) -> ScheduledTask
where
    F: FnOnce() + Send + 'static,
{
    let join = runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        task();
    });

    ScheduledTask {
        handle: join.abort_handle(),
    }
}

/// Returns the runtime of the calling context.
///
/// # Errors
///
/// Returns [`Error::NoRuntime`] when called outside a tokio runtime.
pub fn current_runtime() -> Result<Handle> {
    Handle::try_current().map_err(|_| Error::NoRuntime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn task_runs_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let runtime = current_runtime().unwrap();

        let task = schedule(&runtime, Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_runs() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let runtime = current_runtime().unwrap();

        let task = schedule(&runtime, Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        task.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_does_not_cancel() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let runtime = current_runtime().unwrap();

        drop(schedule(&runtime, Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn current_runtime_fails_outside_tokio() {
        assert_eq!(current_runtime().unwrap_err(), Error::NoRuntime);
    }
}
