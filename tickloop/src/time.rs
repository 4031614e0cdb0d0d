//! Time APIs for obtaining the current time and calculating with points in time and durations.
//!
//! These APIs have microsecond resolution and use 32-bit arithmetic throughout. The underlying
//! counter wraps around after roughly 71.6 minutes, and every difference computed here tolerates
//! a single wraparound between the two readings.

use core::cell::Cell;
use core::fmt;

use crate::Error;

// Export aliases for fugit types
pub type Instant = fugit::Instant<u32, 1, 1_000_000>;
pub type Duration = fugit::Duration<u32, 1, 1_000_000>;

/// The largest tick value a [`TickSource`] reports before wrapping back to zero.
pub const MAX_TICK: u32 = u32::MAX;

/// Trait for time providers.
///
/// The hardware interface has to provide an implementation of `TickSource` to the timers. The
/// implementation must have microsecond accuracy.
///
/// This trait can also be implemented by a mock timer for testing (see [`MockTickSource`]).
pub trait TickSource {
    /// Obtain the current time as an [`Instant`].
    ///
    /// The [`Instant`]s returned by this function must never move backwards in time, except when
    /// the underlying value wraps around. The wrap must happen at [`MAX_TICK`]: a narrower
    /// counter (for example a 16-bit hardware timer) makes [`elapsed`] misread its wraparound as
    /// an almost full 32-bit period.
    fn now(&self) -> Instant;
}

impl<S: TickSource + ?Sized> TickSource for &S {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Returns the time that passed between `since` and `now`.
///
/// The subtraction is modular, so the result is correct when the counter wrapped past
/// [`MAX_TICK`] between the two readings, as long as it wrapped at most once. For
/// `now < since` this equals `(MAX_TICK - since) + now + 1`.
pub fn elapsed(since: Instant, now: Instant) -> Duration {
    Duration::from_ticks(now.ticks().wrapping_sub(since.ticks()))
}

/// Units an interval can be specified in.
///
/// Intervals are always stored in microseconds; the unit only matters when converting a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    Micros,
    #[default]
    Millis,
    Seconds,
}

impl TimeUnit {
    /// Returns the number of microsecond ticks in one unit.
    pub const fn ticks_per_unit(self) -> u32 {
        match self {
            TimeUnit::Micros => 1,
            TimeUnit::Millis => 1_000,
            TimeUnit::Seconds => 1_000_000,
        }
    }

    /// Converts `value` units to a [`Duration`].
    ///
    /// Returns [`Error::IntervalOverflow`] if the result does not fit in 32 bits of microseconds.
    pub fn checked_ticks(self, value: u32) -> Result<Duration, Error> {
        value
            .checked_mul(self.ticks_per_unit())
            .map(Duration::from_ticks)
            .ok_or(Error::IntervalOverflow { value, unit: self })
    }

    /// Converts `value` units to a [`Duration`], saturating at [`MAX_TICK`] microseconds.
    pub fn ticks(self, value: u32) -> Duration {
        Duration::from_ticks(value.saturating_mul(self.ticks_per_unit()))
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
            TimeUnit::Seconds => "s",
        })
    }
}

/// Tick source with manually controlled time, for testing.
///
/// # Example
///
/// ```
/// use tickloop::time::{MockTickSource, TickSource};
///
/// let clock = MockTickSource::new();
/// assert_eq!(clock.now().ticks(), 0);
///
/// clock.advance(1_000);
/// assert_eq!(clock.now().ticks(), 1_000);
/// ```
#[derive(Debug, Default)]
pub struct MockTickSource {
    current: Cell<u32>,
}

impl MockTickSource {
    /// Creates a mock tick source reading 0.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a mock tick source reading `ticks`.
    pub const fn starting_at(ticks: u32) -> Self {
        Self {
            current: Cell::new(ticks),
        }
    }

    /// Sets the current reading to an absolute value.
    pub fn set(&self, ticks: u32) {
        self.current.set(ticks);
    }

    /// Moves the current reading forward by `ticks`, wrapping like a hardware counter.
    pub fn advance(&self, ticks: u32) {
        self.current.set(self.current.get().wrapping_add(ticks));
    }
}

impl TickSource for MockTickSource {
    fn now(&self) -> Instant {
        Instant::from_ticks(self.current.get())
    }
}
