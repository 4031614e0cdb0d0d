//! Free-running microsecond counter on a TIMER peripheral.

use core::ops::Deref;

use crate::pac::{timer0::RegisterBlock, TIMER0};
#[cfg(not(feature = "51"))]
use crate::pac::{TIMER1, TIMER2};
use tickloop::time::{Instant, TickSource};

/// Capture/compare register used to latch the counter value.
const CAPTURE: usize = 0;

/// TIMER instances that can drive a [`CounterTimer`].
///
/// Only instances that support the 32-bit bit mode implement this trait.
pub trait Instance: Deref<Target = RegisterBlock> {}

impl Instance for TIMER0 {}
// TIMER1 and TIMER2 are limited to 16 bits on the nRF51.
#[cfg(not(feature = "51"))]
impl Instance for TIMER1 {}
#[cfg(not(feature = "51"))]
impl Instance for TIMER2 {}

/// A TIMER peripheral configured as a 32-bit counter incrementing at 1 MHz.
///
/// The counter wraps around after `u32::MAX` microseconds, which is exactly the wrapping
/// behaviour [`TickSource`] expects. Several interval timers can share one `CounterTimer` by
/// reference.
///
/// On the nRF51 only TIMER0 counts to 32 bits, so it is the only usable instance there. On the
/// nRF52 series TIMER0, TIMER1 and TIMER2 are all 32-bit capable.
pub struct CounterTimer<T: Instance> {
    inner: T,
}

impl<T: Instance> CounterTimer<T> {
    /// Configures and starts `peripheral`, counting up from zero.
    pub fn init(peripheral: T) -> Self {
        peripheral.tasks_stop.write(|w| unsafe { w.bits(1) });
        peripheral.mode.write(|w| w.mode().timer());
        peripheral.bitmode.write(|w| w.bitmode()._32bit());
        // 16 MHz / 2^4 = 1 MHz
        #[allow(unused_unsafe)]
        peripheral.prescaler.write(|w| unsafe { w.prescaler().bits(4) });
        peripheral.tasks_clear.write(|w| unsafe { w.bits(1) });
        peripheral.tasks_start.write(|w| unsafe { w.bits(1) });

        Self { inner: peripheral }
    }

    /// Stops the counter and returns the peripheral.
    pub fn free(self) -> T {
        self.inner.tasks_stop.write(|w| unsafe { w.bits(1) });
        self.inner
    }
}

impl<T: Instance> TickSource for CounterTimer<T> {
    fn now(&self) -> Instant {
        self.inner.tasks_capture[CAPTURE].write(|w| unsafe { w.bits(1) });
        Instant::from_ticks(self.inner.cc[CAPTURE].read().bits())
    }
}
