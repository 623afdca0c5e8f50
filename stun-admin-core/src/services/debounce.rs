//! Cancellable, replaceable delayed callback

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Holds at most one scheduled callback.
///
/// Scheduling replaces (aborts) the previous callback if it has not fired
/// yet. The callback itself runs synchronously once the delay elapses, so
/// work it hands off with `tokio::spawn` is never cut short by a later
/// `schedule` or `cancel`.
///
/// `schedule` must be called from within a tokio runtime.
#[derive(Default)]
pub struct DebounceTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DebounceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay`, cancelling anything scheduled earlier.
    pub fn schedule<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });

        if let Some(previous) = self.slot().replace(task) {
            previous.abort();
        }
    }

    /// Cancel the scheduled callback. Returns `true` if one was still pending.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(task) => {
                let pending = !task.is_finished();
                task.abort();
                pending
            }
            None => false,
        }
    }

    /// Whether a callback is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(|task| !task.is_finished())
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        if let Some(task) = self.slot().take() {
            task.abort();
        }
    }
}
