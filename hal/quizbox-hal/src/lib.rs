//! Quizbox Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the quizbox
//! drivers consume, so the same driver code runs against any chip HAL
//! (or against recording mocks on the host).
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`i2c::I2cBus`] - Blocking write-only I2C master
//! - [`time::DelayMs`] - Coarse millisecond blocking delay
//! - [`time::SpinWait`] - Nanosecond-order busy-wait for bit-banged waveforms
//!
//! Blanket adapters in [`compat`] let any `embedded-hal` 1.0 implementor
//! satisfy these traits directly.

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod gpio;
pub mod i2c;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use time::{CycleSpin, DelayMs, SpinWait};
