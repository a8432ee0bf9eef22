//! `embedded-hal` 1.0 adapters
//!
//! Wrap any `embedded-hal` pin, I2C bus or delay in [`Compat`] to use it
//! with the quizbox drivers. Pin and delay adapters discard the
//! `embedded-hal` error value: the drivers treat pin writes and waits as
//! infallible, and on real GPIO these errors are `Infallible` anyway. The
//! I2C adapter keeps the transport error type so bus failures still
//! surface through the display driver's `Result`.

use crate::gpio::OutputPin;
use crate::i2c::I2cBus;
use crate::time::{DelayMs, SpinWait};

/// Newtype adapter from `embedded-hal` traits to quizbox-hal traits
#[derive(Debug, Clone, Copy)]
pub struct Compat<T>(pub T);

impl<T> Compat<T> {
    /// Wrap an `embedded-hal` implementor
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Unwrap back to the inner implementor
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<P> OutputPin for Compat<P>
where
    P: embedded_hal::digital::OutputPin,
{
    fn set_high(&mut self) {
        let _ = self.0.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.0.set_low();
    }
}

impl<T> I2cBus for Compat<T>
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }
}

impl<D> DelayMs for Compat<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(&mut self.0, ms);
    }
}

impl<D> SpinWait for Compat<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn wait_ns(&mut self, ns: u32) {
        embedded_hal::delay::DelayNs::delay_ns(&mut self.0, ns);
    }
}
