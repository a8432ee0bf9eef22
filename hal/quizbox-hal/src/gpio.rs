//! GPIO pin abstractions
//!
//! A digital output is all the quizbox peripherals need: the WS2812B data
//! line, the buzzer, and the three status LED channels are each one pin.
//! The drivers only ever command a level, never read one back, so the
//! trait is write-only.

/// Digital output pin
///
/// Pin writes are infallible at this level; a transport that can fail
/// (e.g. an expander behind a bus) is modelled as a bus, not a pin.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
