//! Delay and busy-wait abstractions
//!
//! Two granularities exist because two very different consumers exist: the
//! character LCD is happy with millisecond waits from whatever timer the
//! chip HAL provides, while the WS2812B waveform needs sub-microsecond
//! holds that only a calibrated spin loop can deliver.

/// Coarse blocking delay with millisecond granularity
pub trait DelayMs {
    /// Block the calling thread for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Nanosecond-order blocking busy-wait
///
/// Implementations spin the CPU rather than sleeping; the wait is
/// approximate and sensitive to compiler optimization and clock
/// configuration. Calibrate once at startup from the actual core clock.
pub trait SpinWait {
    /// Busy-wait for approximately `ns` nanoseconds
    fn wait_ns(&mut self, ns: u32);
}

/// Spin-loop wait calibrated from the core clock frequency
///
/// Converts a nanosecond target into a loop iteration count, assuming
/// two cycles per iteration for a spin of this shape; this is delay-loop
/// timing, not hardware-timer timing.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleSpin {
    core_hz: u32,
}

impl CycleSpin {
    /// Calibrate from the configured core clock frequency in Hz
    pub fn from_core_clock(core_hz: u32) -> Self {
        Self { core_hz }
    }

    /// Loop iterations approximating `ns` nanoseconds
    fn iterations(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.core_hz as u64) / 1_000_000_000;
        // Two cycles per loop iteration
        (cycles / 2) as u32
    }
}

impl SpinWait for CycleSpin {
    fn wait_ns(&mut self, ns: u32) {
        let mut n = self.iterations(ns);
        while n > 0 {
            core::hint::spin_loop();
            n -= 1;
        }
    }
}
