//! Non-blocking interval timers for cooperative main loops.
//!
//! An [`IntervalTimer`] is polled on every pass through a firmware's main loop and reports
//! whether its interval has elapsed since it was last reset. Nothing blocks and nothing relies on
//! interrupts: the timer only reads a free-running microsecond counter through the
//! [`TickSource`] trait and compares tick differences, tolerating the counter wrapping around.
//!
//! ```
//! use tickloop::time::{MockTickSource, TimeUnit};
//! use tickloop::IntervalTimer;
//!
//! let clock = MockTickSource::new();
//! let mut blink = IntervalTimer::with_interval(&clock, 250, TimeUnit::Millis);
//! let mut report = IntervalTimer::with_interval(&clock, 1, TimeUnit::Seconds);
//!
//! clock.advance(250_000);
//! assert!(blink.is_ready(true));
//! assert!(!report.is_ready(true));
//! ```
//!
//! # Cargo features
//!
//! * `log`: emit diagnostics through the `log` crate.
//! * `defmt`: emit diagnostics through `defmt` and implement `defmt::Format` for public types.

#![no_std]
#![warn(rust_2018_idioms)]

#[macro_use]
mod logging;

pub mod interval;
pub mod shared;
pub mod time;

pub use self::interval::{is_iter, IntervalTimer};
pub use self::shared::SharedIntervalTimer;
pub use self::time::{TickSource, TimeUnit};

use core::fmt;

/// Errors returned by the checked interval APIs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The requested interval does not fit in 32 bits of microseconds.
    IntervalOverflow { value: u32, unit: TimeUnit },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IntervalOverflow { value, unit } => {
                write!(f, "interval of {} {} overflows the tick counter", value, unit)
            }
        }
    }
}
