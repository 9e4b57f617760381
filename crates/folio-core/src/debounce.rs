//! Quiet-period debouncing.
//!
//! Every call to [`Debouncer::schedule`] supersedes the previous one. A
//! scheduled invocation waits out the delay and then fires only if nothing
//! newer was scheduled in the meantime, so a burst of keystrokes produces at
//! most one search per pause in typing.
//!
//! The timer is supplied by the caller (`gloo-timers` in the browser, tokio on
//! native), which keeps this module free of platform code.
//!
//! ```ignore
//! let pending = debouncer.schedule();
//! spawn(async move {
//!     if pending.settled(platform::sleep(debouncer.delay())).await {
//!         controller.send(QueryEvent::Text(text));
//!     }
//! });
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Supersede-previous debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

/// A scheduled invocation, valid until something newer is scheduled.
#[derive(Debug)]
#[must_use = "a pending invocation does nothing until awaited"]
pub struct Pending {
    ticket: u64,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules an invocation, cancelling whichever one was pending.
    pub fn schedule(&self) -> Pending {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Pending {
            ticket,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Cancels the pending invocation without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Pending {
    /// Whether this is still the most recent invocation.
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.ticket
    }

    /// Waits on `sleep` and reports whether the invocation should fire.
    pub async fn settled<F>(self, sleep: F) -> bool
    where
        F: Future<Output = ()>,
    {
        sleep.await;
        self.is_current()
    }
}
