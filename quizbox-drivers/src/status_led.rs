//! Discrete RGB status LED
//!
//! Three output pins, one per channel. Common-anode parts (the usual
//! breakout) light a channel by driving its pin low, so the driver
//! carries an inversion flag and callers only think in colors.

use quizbox_core::feedback::Color;
use quizbox_hal::OutputPin;

/// Driver for a three-pin RGB status LED
pub struct StatusLed<P> {
    red: P,
    green: P,
    blue: P,
    /// If true, a channel is lit by driving its pin low
    active_low: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Common-anode LED: channels light when their pin is low
    pub fn common_anode(red: P, green: P, blue: P) -> Self {
        Self::new(red, green, blue, true)
    }

    /// Common-cathode LED: channels light when their pin is high
    pub fn common_cathode(red: P, green: P, blue: P) -> Self {
        Self::new(red, green, blue, false)
    }

    fn new(red: P, green: P, blue: P, active_low: bool) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            active_low,
        };
        // Start dark
        led.off();
        led
    }

    /// Show a color, lighting exactly its channels
    pub fn show(&mut self, color: Color) {
        let (r, g, b) = match color {
            Color::Off => (false, false, false),
            Color::Red => (true, false, false),
            Color::Green => (false, true, false),
            Color::Blue => (false, false, true),
        };
        self.drive(r, g, b);
    }

    /// Extinguish all channels
    pub fn off(&mut self) {
        self.drive(false, false, false);
    }

    fn drive(&mut self, r: bool, g: bool, b: bool) {
        let active_low = self.active_low;
        self.red.set_state(r ^ active_low);
        self.green.set_state(g ^ active_low);
        self.blue.set_state(b ^ active_low);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[test]
    fn common_anode_starts_dark_with_all_pins_high() {
        let led = StatusLed::common_anode(MockPin::default(), MockPin::default(), MockPin::default());
        assert!(led.red.high && led.green.high && led.blue.high);
    }

    #[test]
    fn common_anode_lights_by_pulling_low() {
        let mut led =
            StatusLed::common_anode(MockPin::default(), MockPin::default(), MockPin::default());

        led.show(Color::Blue);
        assert!(led.red.high);
        assert!(led.green.high);
        assert!(!led.blue.high);

        led.show(Color::Red);
        assert!(!led.red.high);
        assert!(led.green.high && led.blue.high);

        led.off();
        assert!(led.red.high && led.green.high && led.blue.high);
    }

    #[test]
    fn common_cathode_lights_by_driving_high() {
        let mut led =
            StatusLed::common_cathode(MockPin::default(), MockPin::default(), MockPin::default());
        assert!(!led.red.high && !led.green.high && !led.blue.high);

        led.show(Color::Green);
        assert!(led.green.high);
        assert!(!led.red.high && !led.blue.high);
    }
}
