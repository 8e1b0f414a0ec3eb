//! Cancellable delayed action keyed to the latest trigger.
//!
//! The event loop owns the clock: callers pass `Instant`s in, and the loop
//! calls [`Debounce::poll`] on every tick. At most one action is pending.

use std::time::{Duration, Instant};

/// A single pending "quiet period elapsed" action.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    pending: Option<Instant>,
}

impl Debounce {
    /// Idle debounce that fires `delay` after the last restart.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Cancel any pending action and schedule a new one `delay` after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.pending = Some(now + self.delay);
    }

    /// Drop the pending action without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deadline of the pending action, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Fire the pending action if its deadline has passed.
    ///
    /// Returns `true` exactly once per scheduled action.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
