//! WS2812B addressable LED bit-banger
//!
//! The chain is self-clocked over a single wire: every bit is a high
//! pulse whose duration encodes the value, followed by a low tail that
//! keeps the total bit period constant. There is no resynchronization
//! mid-frame, so the whole transmission runs inside one critical section;
//! any interruption longer than a bit period corrupts the waveform.
//!
//! There is no error channel. A floating pin, a wrong clock calibration
//! or a truncated buffer all fail silently as wrong colors on the chain.

use quizbox_hal::{OutputPin, SpinWait};

/// High time of a 0 bit, nanoseconds (datasheet T0H)
pub const T0H_NS: u32 = 350;
/// High time of a 1 bit (datasheet T1H)
pub const T1H_NS: u32 = 700;
/// Low tail of a 0 bit (datasheet T0L)
pub const T0L_NS: u32 = 800;
/// Low tail of a 1 bit (datasheet T1L)
pub const T1L_NS: u32 = 600;
/// Post-frame low hold before the chain latches the colors; the
/// datasheet minimum is 50 us
pub const RESET_NS: u32 = 80_000;

/// One LED's color in the chain's wire order (green, red, blue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grb {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

impl Grb {
    /// All channels off
    pub const OFF: Self = Self { g: 0, r: 0, b: 0 };

    /// Build from the conventional red/green/blue order
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// The three bytes in wire transmission order
    pub const fn wire_bytes(&self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }
}

/// Driver for a WS2812B chain on one output pin
///
/// `wait` is the calibrated busy-wait (see `quizbox_hal::CycleSpin`);
/// substituting a hardware-timer wait works as long as it can honor
/// sub-microsecond holds.
pub struct Ws2812<P, W> {
    pin: P,
    wait: W,
}

impl<P, W> Ws2812<P, W>
where
    P: OutputPin,
    W: SpinWait,
{
    pub fn new(pin: P, wait: W) -> Self {
        Self { pin, wait }
    }

    /// Release the pin and wait handles
    pub fn release(self) -> (P, W) {
        (self.pin, self.wait)
    }

    /// Transmit a frame of colors and latch it
    ///
    /// Blocks for the full transmission (1.25 us per bit plus the reset
    /// hold) with interrupts masked throughout; the prior interrupt state
    /// is restored on return. An empty frame still emits the reset hold.
    pub fn write(&mut self, colors: &[Grb]) {
        critical_section::with(|_| {
            for color in colors {
                for byte in color.wire_bytes() {
                    self.send_byte(byte);
                }
            }
            self.latch();
        });
    }

    /// Transmit raw wire-order bytes (3 per LED) and latch
    ///
    /// For callers that keep their own G,R,B byte buffer; `write` is the
    /// typed equivalent.
    pub fn send_raw(&mut self, bytes: &[u8]) {
        critical_section::with(|_| {
            for &byte in bytes {
                self.send_byte(byte);
            }
            self.latch();
        });
    }

    /// Shift one byte out, most significant bit first
    fn send_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            let one = byte & (1 << bit) != 0;
            self.pin.set_high();
            self.wait.wait_ns(if one { T1H_NS } else { T0H_NS });
            self.pin.set_low();
            self.wait.wait_ns(if one { T1L_NS } else { T0L_NS });
        }
    }

    /// Hold the line low until the chain commits the frame
    fn latch(&mut self) {
        self.pin.set_low();
        self.wait.wait_ns(RESET_NS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        High,
        Low,
        Wait(u32),
    }

    /// Pin and wait mocks share one log so the interleaving is visible
    #[derive(Clone)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn new() -> Self {
            Self(Rc::new(RefCell::new(Vec::new())))
        }

        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }
    }

    impl OutputPin for Recorder {
        fn set_high(&mut self) {
            self.0.borrow_mut().push(Event::High);
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().push(Event::Low);
        }
    }

    impl SpinWait for Recorder {
        fn wait_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Event::Wait(ns));
        }
    }

    /// Split the log into (high_ns, low_ns) pulses plus the trailing
    /// latch, checking waveform shape along the way
    fn pulses(events: &[Event]) -> (Vec<(u32, u32)>, u32) {
        // Trailing latch: pin low then one reset-length wait
        let n = events.len();
        assert!(n >= 2);
        assert_eq!(events[n - 2], Event::Low);
        let reset = match events[n - 1] {
            Event::Wait(ns) => ns,
            other => panic!("expected trailing wait, got {other:?}"),
        };

        let body = &events[..n - 2];
        assert_eq!(body.len() % 4, 0, "4 events per bit");
        let out = body
            .chunks_exact(4)
            .map(|bit| {
                assert_eq!(bit[0], Event::High);
                assert_eq!(bit[2], Event::Low);
                match (bit[1], bit[3]) {
                    (Event::Wait(h), Event::Wait(l)) => (h, l),
                    other => panic!("malformed bit: {other:?}"),
                }
            })
            .collect();
        (out, reset)
    }

    fn expected_bits(bytes: &[u8]) -> Vec<bool> {
        bytes
            .iter()
            .flat_map(|&b| (0..8).rev().map(move |i| b & (1 << i) != 0))
            .collect()
    }

    #[test]
    fn one_led_is_twenty_four_timed_pulses() {
        let rec = Recorder::new();
        let mut chain = Ws2812::new(rec.clone(), rec.clone());

        let color = Grb::rgb(0xA5, 0x3C, 0x01);
        chain.write(&[color]);

        let (pulses, reset) = pulses(&rec.events());
        assert_eq!(pulses.len(), 24);
        assert!(reset >= 50_000);

        for (pulse, bit) in pulses.iter().zip(expected_bits(&[0x3C, 0xA5, 0x01])) {
            let (high, low) = *pulse;
            if bit {
                assert_eq!((high, low), (T1H_NS, T1L_NS));
            } else {
                assert_eq!((high, low), (T0H_NS, T0L_NS));
            }
            // Constant bit period regardless of value
            assert_eq!(high + low, 1300);
        }
    }

    #[test]
    fn frame_length_scales_with_led_count() {
        let rec = Recorder::new();
        let mut chain = Ws2812::new(rec.clone(), rec.clone());

        chain.write(&[Grb::OFF; 7]);
        let (pulses, _) = pulses(&rec.events());
        assert_eq!(pulses.len(), 24 * 7);
    }

    #[test]
    fn empty_frame_still_latches() {
        let rec = Recorder::new();
        let mut chain = Ws2812::new(rec.clone(), rec.clone());

        chain.write(&[]);
        assert_eq!(rec.events(), [Event::Low, Event::Wait(RESET_NS)]);
    }

    #[test]
    fn raw_bytes_match_the_typed_path() {
        let rec_typed = Recorder::new();
        let mut typed = Ws2812::new(rec_typed.clone(), rec_typed.clone());
        typed.write(&[Grb::rgb(10, 20, 30)]);

        let rec_raw = Recorder::new();
        let mut raw = Ws2812::new(rec_raw.clone(), rec_raw.clone());
        raw.send_raw(&[20, 10, 30]);

        assert_eq!(rec_typed.events(), rec_raw.events());
    }

    #[test]
    fn wire_order_is_green_red_blue() {
        assert_eq!(Grb::rgb(1, 2, 3).wire_bytes(), [2, 1, 3]);
    }
}
