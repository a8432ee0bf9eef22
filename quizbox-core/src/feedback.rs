//! Answer feedback: buzzer tones and status LED colors
//!
//! The sequences live here as plain data so the board loop can hand them
//! to whatever buzzer/LED driver it owns without this crate touching
//! hardware.

use crate::quiz::Verdict;

/// One square-wave tone, or a silent rest when `freq_hz` is 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Frequency in Hz; 0 means rest for the duration
    pub freq_hz: u32,
    /// Duration in milliseconds
    pub duration_ms: u32,
}

impl Tone {
    /// A tone at `freq_hz` for `duration_ms`
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }

    /// Silence for `duration_ms`
    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(0, duration_ms)
    }
}

/// Two descending beeps with a short gap
pub const CORRECT_TONES: &[Tone] = &[Tone::new(2000, 450), Tone::rest(200), Tone::new(1000, 450)];

/// One long low buzz
pub const WRONG_TONES: &[Tone] = &[Tone::new(900, 4000)];

/// Status LED color, one channel per pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Off,
    Red,
    Green,
    Blue,
}

/// The status LED color shown for a verdict
pub fn feedback_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Blue,
        Verdict::Wrong => Color::Red,
    }
}
