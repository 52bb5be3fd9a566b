//! Cancel-and-reschedule timer.
//!
//! Re-arming replaces any pending task; only the last scheduled task within
//! a burst runs once its delay elapses. Aborting the pending task is the
//! sole cancellation primitive; an already-started callback is not
//! interrupted.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

#[derive(Debug, Default)]
pub struct Debouncer {
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer: cancel any pending task and run `task` after `delay`.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        }));
    }

    /// Drop the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
