//! Cooperative cancellation.
//!
//! One fresh token is created per preset activation and shared with that
//! preset's blink tasks; a second, process-lifetime token serves as the
//! global stop flag. Signaling a token never preempts anything, it only
//! prevents the next frame write after a task's next wake-up.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// One-shot cooperative stop signal.
///
/// `cancel` is idempotent. Blink tasks poll `is_cancelled` at half-period
/// boundaries; `cancelled` supports at most one concurrent async waiter
/// (the conductor's window hold).
pub struct CancellationToken {
    cancelled: AtomicBool,
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl CancellationToken {
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            signal: Signal::new(),
        }
    }

    /// Request a stop. Signaling an already-stopped token is a no-op.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.signal.signal(());
        }
    }

    /// Whether a stop has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once a stop has been requested.
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        self.signal.wait().await;
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
