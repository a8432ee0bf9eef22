//! Board-agnostic core logic for the quizbox appliance
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Question bank types and answer matching
//! - Round scoring and wrap-around
//! - Fixed-width display text helpers (centering, score screen)
//! - Buzzer tone sequences and status LED color mapping for feedback

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod feedback;
pub mod quiz;
pub mod text;

pub use feedback::{feedback_color, Color, Tone};
pub use quiz::{Question, QuizRound, RoundScore, Verdict};
