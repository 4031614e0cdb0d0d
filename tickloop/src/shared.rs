//! Interrupt-safe access to an [`IntervalTimer`].
//!
//! [`IntervalTimer`] holds plain scalar fields and needs `&mut self` to poll. When the same timer
//! is touched from the main loop and from an interrupt handler, wrap it in a
//! [`SharedIntervalTimer`]: every access then runs inside a critical section, so the tick read and
//! the update of the stored reset point cannot be interleaved.
//!
//! The final binary must provide a `critical-section` implementation (for example through the
//! `critical-section-single-core` feature of `cortex-m`).

use core::cell::RefCell;

use critical_section::Mutex;

use crate::interval::IntervalTimer;
use crate::time::TickSource;

/// An [`IntervalTimer`] behind a critical-section mutex.
pub struct SharedIntervalTimer<S: TickSource> {
    inner: Mutex<RefCell<IntervalTimer<S>>>,
}

impl<S: TickSource> SharedIntervalTimer<S> {
    /// Wraps `timer` for access from several execution contexts.
    pub const fn new(timer: IntervalTimer<S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(timer)),
        }
    }

    /// Runs `f` with exclusive access to the timer, inside a critical section.
    ///
    /// # Panics
    ///
    /// Panics if called again from within `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut IntervalTimer<S>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    /// Polls the timer, see [`IntervalTimer::is_ready`].
    pub fn is_ready(&self, auto_reset: bool) -> bool {
        self.lock(|timer| timer.is_ready(auto_reset))
    }

    /// Starts a new window at the current tick, see [`IntervalTimer::reset_time`].
    pub fn reset_time(&self) {
        self.lock(|timer| timer.reset_time())
    }

    /// Returns how many times the timer has fired, see [`IntervalTimer::counter`].
    pub fn counter(&self) -> u32 {
        self.lock(|timer| timer.counter())
    }

    /// Destroys the wrapper and returns the timer.
    pub fn into_inner(self) -> IntervalTimer<S> {
        self.inner.into_inner().into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{MockTickSource, TimeUnit};

    #[test]
    fn polls_through_lock() {
        let clock = MockTickSource::new();
        let shared =
            SharedIntervalTimer::new(IntervalTimer::with_interval(&clock, 10, TimeUnit::Millis));

        assert!(!shared.is_ready(true));
        clock.set(10_000);
        assert!(shared.is_ready(true));
        assert!(!shared.is_ready(true));
        assert_eq!(shared.counter(), 1);
    }

    #[test]
    fn reset_time_from_other_context() {
        let clock = MockTickSource::new();
        let shared =
            SharedIntervalTimer::new(IntervalTimer::with_interval(&clock, 10, TimeUnit::Millis));

        clock.set(10_000);
        shared.reset_time();
        assert!(!shared.is_ready(false));
        assert_eq!(shared.lock(|timer| timer.remaining().ticks()), 10_000);

        clock.set(20_000);
        assert!(shared.is_ready(false));
        assert!(shared.is_ready(false));

        let timer = shared.into_inner();
        assert_eq!(timer.counter(), 2);
    }
}
