//! I2C bus abstractions
//!
//! The PCF8574 backpack is write-only from the driver's point of view, so
//! the bus trait exposes a single blocking master-write primitive.

/// Blocking I2C bus master, write direction only
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address, blocking until the
    /// transfer completes or the transport reports a failure
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}
