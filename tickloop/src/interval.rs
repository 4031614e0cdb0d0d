//! Interval timers polled from a main loop.
//!
//! An [`IntervalTimer`] remembers the tick reading of its last reset point and, when polled,
//! compares the time elapsed since then against its configured interval. Whether a successful
//! poll also moves the reset point forward is decided by the caller on each call to
//! [`IntervalTimer::is_ready`]; [`IntervalTimer::reset_time`] moves it explicitly.
//!
//! Every successful poll also bumps a trigger counter, which makes it easy to alternate between
//! two actions on consecutive firings:
//!
//! ```
//! use tickloop::time::{MockTickSource, TimeUnit};
//! use tickloop::IntervalTimer;
//!
//! let clock = MockTickSource::new();
//! let mut led = IntervalTimer::with_interval(&clock, 500, TimeUnit::Millis);
//! assert!(led.is_never());
//!
//! clock.advance(500_000);
//! assert!(led.is_ready(true));
//! assert!(led.is_odd()); // first firing: turn the LED on
//!
//! clock.advance(500_000);
//! assert!(led.is_ready(true));
//! assert!(led.is_even()); // second firing: turn it off
//! ```

use crate::time::{self, Duration, Instant, TickSource, TimeUnit};
use crate::Error;

/// A non-blocking timer that becomes ready once its interval has elapsed.
///
/// The interval is stored in microsecond ticks. Elapsed time is computed with wrapping
/// arithmetic, so readiness is reported correctly across a wraparound of the tick source, as
/// long as the timer is polled at least once per counter period (about 71.6 minutes).
///
/// An interval of zero makes the timer ready on every poll.
#[derive(Debug)]
pub struct IntervalTimer<S: TickSource> {
    source: S,
    interval: Duration,
    last_trigger: Instant,
    count: u32,
}

impl<S: TickSource> IntervalTimer<S> {
    /// Creates a timer with a zero interval, starting its first window now.
    pub fn new(source: S) -> Self {
        let last_trigger = source.now();
        Self {
            source,
            interval: Duration::from_ticks(0),
            last_trigger,
            count: 0,
        }
    }

    /// Creates a timer that becomes ready `value` `unit`s from now.
    ///
    /// Intervals too large for the tick counter are saturated, see [`set_interval`].
    ///
    /// [`set_interval`]: Self::set_interval
    pub fn with_interval(source: S, value: u32, unit: TimeUnit) -> Self {
        let mut timer = Self::new(source);
        timer.set_interval(value, unit);
        timer
    }

    /// Reconfigures the interval and returns it in microseconds.
    ///
    /// This restarts the current window and clears the trigger counter. A value whose microsecond
    /// equivalent exceeds 32 bits is clamped to [`time::MAX_TICK`] ticks; use
    /// [`try_set_interval`] to reject it instead.
    ///
    /// [`try_set_interval`]: Self::try_set_interval
    pub fn set_interval(&mut self, value: u32, unit: TimeUnit) -> Duration {
        let interval = match unit.checked_ticks(value) {
            Ok(interval) => interval,
            Err(_) => {
                warn!(
                    "interval of {} {} saturated to {} us",
                    value,
                    unit,
                    time::MAX_TICK
                );
                unit.ticks(value)
            }
        };
        self.apply_interval(interval)
    }

    /// Like [`set_interval`], but leaves the timer untouched if the interval does not fit.
    ///
    /// [`set_interval`]: Self::set_interval
    pub fn try_set_interval(&mut self, value: u32, unit: TimeUnit) -> Result<Duration, Error> {
        let interval = unit.checked_ticks(value)?;
        Ok(self.apply_interval(interval))
    }

    fn apply_interval(&mut self, interval: Duration) -> Duration {
        self.interval = interval;
        self.reset_time();
        self.count = 0;
        debug!("interval set to {} us", interval.ticks());
        interval
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Polls the timer.
    ///
    /// Returns `true` if at least the configured interval has passed since the last reset point,
    /// and counts the firing. If `auto_reset` is `true`, a firing also starts the next window at
    /// the current tick; otherwise the timer keeps reporting ready until [`reset_time`] is
    /// called.
    ///
    /// [`reset_time`]: Self::reset_time
    pub fn is_ready(&mut self, auto_reset: bool) -> bool {
        let now = self.source.now();
        let elapsed = time::elapsed(self.last_trigger, now);
        if elapsed.ticks() < self.interval.ticks() {
            return false;
        }

        self.count = next_count(self.count);
        if auto_reset {
            self.last_trigger = now;
        }
        trace!(
            "timer fired after {} us (count {})",
            elapsed.ticks(),
            self.count
        );
        true
    }

    /// Starts a new window at the current tick.
    ///
    /// Call this after a long-running task triggered by [`is_ready`] so that the task's own
    /// duration does not count towards the next interval.
    ///
    /// The trigger counter is left unchanged; only [`is_ready`] counts firings.
    ///
    /// [`is_ready`]: Self::is_ready
    pub fn reset_time(&mut self) {
        self.last_trigger = self.source.now();
    }

    /// Returns how many times the timer has fired.
    pub fn counter(&self) -> u32 {
        self.count
    }

    /// Sets the trigger counter. `0` means "never fired".
    pub fn reset_counter(&mut self, value: u32) {
        self.count = value;
    }

    /// Returns `true` if the timer has not fired since creation or the last counter reset.
    pub fn is_never(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the timer has fired an even, nonzero number of times.
    pub fn is_even(&self) -> bool {
        !self.is_never() && self.count % 2 == 0
    }

    /// Returns `true` if the timer has fired an odd number of times.
    pub fn is_odd(&self) -> bool {
        self.count % 2 == 1
    }

    /// Returns the time since the last reset point.
    pub fn elapsed(&self) -> Duration {
        time::elapsed(self.last_trigger, self.source.now())
    }

    /// Returns the time left until the timer becomes ready, or zero if it already is.
    pub fn remaining(&self) -> Duration {
        Duration::from_ticks(self.interval.ticks().saturating_sub(self.elapsed().ticks()))
    }

    /// Returns a reference to the tick source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Destroys the timer and returns its tick source.
    pub fn free(self) -> S {
        self.source
    }
}

/// Returns `true` if `i` is an even iteration index.
///
/// This is independent of any timer's counter.
pub const fn is_iter(i: u32) -> bool {
    i % 2 == 0
}

/// Increments a trigger count.
///
/// On overflow the count restarts at 1 or 2 instead of 0, so that odd and even firings keep
/// alternating and the count never reads as "never fired" again.
fn next_count(count: u32) -> u32 {
    match count.checked_add(1) {
        Some(next) => next,
        None => {
            let next = if count % 2 == 0 { 1 } else { 2 };
            trace!("trigger counter wrapped, restarting at {}", next);
            next
        }
    }
}
