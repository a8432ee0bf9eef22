//! Hardware driver implementations
//!
//! This crate provides the bit-banging drivers behind the quizbox
//! appliance's user-facing peripherals:
//!
//! - HD44780 character LCD behind a PCF8574 I2C backpack (4-bit mode)
//! - WS2812B addressable LED chain (single-wire, software-timed)
//! - Piezo buzzer square-wave tone generator
//! - Discrete RGB status LED
//!
//! All drivers consume the `quizbox-hal` traits, so they are exercised on
//! the host against recording mocks; timing itself is only verifiable on
//! real silicon.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buzzer;
pub mod lcd;
pub mod status_led;
pub mod ws2812;
