//! Piezo buzzer square-wave tone generator
//!
//! Software-timed like the LED chain, but far less fussy: the half
//! period is derived from the requested frequency and held with the
//! calibrated spin wait, so pitch tracks the tone table instead of the
//! compiler's mood. Rests (frequency 0) use the coarse millisecond delay.

use quizbox_core::feedback::Tone;
use quizbox_hal::{DelayMs, OutputPin, SpinWait};

/// Driver for a piezo buzzer on one output pin
pub struct Buzzer<P, W, D> {
    pin: P,
    wait: W,
    delay: D,
}

impl<P, W, D> Buzzer<P, W, D>
where
    P: OutputPin,
    W: SpinWait,
    D: DelayMs,
{
    pub fn new(pin: P, wait: W, delay: D) -> Self {
        Self { pin, wait, delay }
    }

    /// Play one tone, blocking for its full duration
    ///
    /// Emits `freq_hz * duration_ms / 1000` square-wave cycles; the pin
    /// is left low afterwards.
    pub fn play(&mut self, tone: Tone) {
        if tone.freq_hz == 0 {
            self.delay.delay_ms(tone.duration_ms);
            return;
        }

        let cycles = tone.freq_hz as u64 * tone.duration_ms as u64 / 1000;
        let half_period_ns = (1_000_000_000 / tone.freq_hz) / 2;

        for _ in 0..cycles {
            self.pin.set_high();
            self.wait.wait_ns(half_period_ns);
            self.pin.set_low();
            self.wait.wait_ns(half_period_ns);
        }
    }

    /// Play a tone sequence in order, blocking until it finishes
    pub fn play_sequence(&mut self, tones: &[Tone]) {
        for &tone in tones {
            self.play(tone);
        }
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
        Spin(u32),
        Rest(u32),
    }

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
            self.0.borrow_mut().push(Event::Spin(ns));
        }
    }

    impl DelayMs for Recorder {
        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Event::Rest(ms));
        }
    }

    #[test]
    fn cycle_count_and_half_period_follow_the_tone() {
        let rec = Recorder::new();
        let mut buzzer = Buzzer::new(rec.clone(), rec.clone(), rec.clone());

        buzzer.play(Tone::new(1000, 10)); // 10 cycles of 1 kHz

        let events = rec.events();
        assert_eq!(events.len(), 4 * 10);
        assert_eq!(
            &events[..4],
            &[
                Event::High,
                Event::Spin(500_000),
                Event::Low,
                Event::Spin(500_000),
            ]
        );
        assert_eq!(events.last(), Some(&Event::Spin(500_000)));
    }

    #[test]
    fn rest_only_delays() {
        let rec = Recorder::new();
        let mut buzzer = Buzzer::new(rec.clone(), rec.clone(), rec.clone());

        buzzer.play(Tone::rest(200));
        assert_eq!(rec.events(), [Event::Rest(200)]);
    }

    #[test]
    fn sequence_plays_in_order() {
        let rec = Recorder::new();
        let mut buzzer = Buzzer::new(rec.clone(), rec.clone(), rec.clone());

        buzzer.play_sequence(&[Tone::new(2000, 1), Tone::rest(5)]);

        let events = rec.events();
        // 2 cycles of 2 kHz, then the rest
        assert_eq!(events.len(), 9);
        assert_eq!(events[1], Event::Spin(250_000));
        assert_eq!(events.last(), Some(&Event::Rest(5)));
    }
}
