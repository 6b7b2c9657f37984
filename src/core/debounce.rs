//! # Debounce
//!
//! Trailing-edge debounce on top of tokio timers.
//!
//! ```text
//! call(a) ──┐
//!           │  call(b) ──┐
//!           │            │   call(c) ──┐
//!           ✗            ✗             └── delay ──► action(c)
//! ```
//!
//! Each call aborts the pending timer and starts a new one, so the action
//! runs once, `delay` after the last call, with the last call's arguments.
//! There is never more than one pending execution per `Debouncer`.
//!
//! Must be called from inside a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::AbortHandle;

/// Wraps an action so that bursts of calls collapse into one execution.
///
/// The action takes a single argument value; use `()` for no arguments or a
/// tuple for several. Nothing is returned to the caller.
pub struct Debouncer<A> {
    delay: Duration,
    action: Arc<dyn Fn(A) + Send + Sync>,
    pending: Option<AbortHandle>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Schedule the action with `args`, replacing any pending execution.
    pub fn call(&mut self, args: A) {
        self.cancel();

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(args);
        });
        self.pending = Some(handle.abort_handle());
    }
}

impl<A> Debouncer<A> {
    /// Drop the pending execution, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while an execution is scheduled but has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
