//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The controller is reachable only through the expander's 8 pins, so
//! every command or character byte travels as two 4-bit nibbles, each
//! latched by pulsing the enable pin. The expander frame packs the nibble
//! at a configurable bit offset plus the RS/RW/EN/backlight control bits;
//! see [`PinMap`] for the wiring knobs.
//!
//! Transport failures propagate as the bus error, but nothing retries or
//! times out: on a successful transport the emitted byte sequence is the
//! whole contract. Timing failures (wrong nibble shift, miswired module)
//! are only visible on the glass; [`CharLcd::ascii_test`] helps diagnose
//! them.

mod geometry;

pub use geometry::Geometry;

use quizbox_hal::{DelayMs, I2cBus};

/// HD44780 command bytes
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
    pub const FUNCTION_SET_4BIT: u8 = 0x20;
    pub const FUNCTION_SET_2LINE: u8 = 0x08;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// PCF8574 bit assignment for the backpack wiring
///
/// `nibble_shift` places the 4 data bits within the expander byte; common
/// backpacks put D4..D7 on P4..P7 (shift 4). If characters lose their
/// rightmost column, try 3 or 5 to match the module's wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Register select mask (data vs command)
    pub rs: u8,
    /// Read/write mask; always written low, the bus is write-only here
    pub rw: u8,
    /// Enable strobe mask
    pub en: u8,
    /// Backlight drive mask
    pub backlight: u8,
    /// Bit offset of the data nibble within the expander byte (3..=5)
    pub nibble_shift: u8,
}

impl PinMap {
    /// The common backpack wiring: RS=P0, RW=P1, EN=P2, BL=P3, D4..D7=P4..P7
    pub const DEFAULT: Self = Self {
        rs: 1 << 0,
        rw: 1 << 1,
        en: 1 << 2,
        backlight: 1 << 3,
        nibble_shift: 4,
    };
}

impl Default for PinMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Enable pulse hold and per-byte settle times, in the controller's
/// coarse timing unit (milliseconds; far above the 450 ns minimum pulse
/// width and the 37 us instruction time, 1.52 ms for clear)
const HOLD_MS: u32 = 1;
const COMMAND_SETTLE_MS: u32 = 2;
const DATA_SETTLE_MS: u32 = 1;
const POWER_UP_MS: u32 = 50;

/// Driver for one HD44780 module on one expander address
///
/// Owns the session state the protocol needs (bus, address, pin map,
/// geometry, backlight flag); `&mut self` on every operation preserves
/// the single-caller assumption the timing discipline relies on.
pub struct CharLcd<B, D> {
    bus: B,
    delay: D,
    addr: u8,
    pins: PinMap,
    geometry: Geometry,
    backlight: bool,
}

impl<B, D> CharLcd<B, D>
where
    B: I2cBus,
    D: DelayMs,
{
    /// Bind a display session with the default backpack wiring
    ///
    /// `addr` is the expander's 7-bit address (0x27 on most modules).
    pub fn new(bus: B, delay: D, addr: u8, geometry: Geometry) -> Self {
        Self::with_pin_map(bus, delay, addr, geometry, PinMap::DEFAULT)
    }

    /// Bind a display session with explicit backpack wiring
    pub fn with_pin_map(bus: B, delay: D, addr: u8, geometry: Geometry, pins: PinMap) -> Self {
        Self {
            bus,
            delay,
            addr: addr & 0x7F,
            pins,
            geometry,
            backlight: true,
        }
    }

    /// The bound geometry
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Release the bus and delay handles
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Power-up initialization into 4-bit mode
    ///
    /// Performs the mandated handshake (three "set 8-bit" nibbles with
    /// decreasing delays, then the switch to 4-bit), function set for the
    /// bound line count, display on with cursor off, clear, and entry
    /// mode increment. Call exactly once before any other operation.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.delay.delay_ms(POWER_UP_MS);

        // 4-bit mode handshake: 0x03 three times, then 0x02
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(2);
        self.write_nibble(0x02, false)?;
        self.delay.delay_ms(2);

        let mut function = cmd::FUNCTION_SET_4BIT;
        if self.geometry.rows > 1 {
            function |= cmd::FUNCTION_SET_2LINE;
        }
        self.command(function)?;

        self.command(cmd::DISPLAY_ON_CURSOR_OFF)?;
        self.clear()?;
        self.command(cmd::ENTRY_MODE_INCREMENT)
    }

    /// Clear the display and wait out the controller's clear time
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Move the cursor to (row, col), clamping out-of-range input to the
    /// last valid index
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), B::Error> {
        let addr = self.geometry.ddram_address(row, col);
        self.command(cmd::SET_DDRAM_ADDR | addr)
    }

    /// Write text at the cursor, auto-advancing per the controller's
    /// DDRAM increment; no wrapping or clipping
    pub fn write_str(&mut self, text: &str) -> Result<(), B::Error> {
        self.write_bytes(text.as_bytes())
    }

    /// Write raw character codes at the cursor (CGROM glyphs beyond ASCII)
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), B::Error> {
        for &b in bytes {
            self.data(b)?;
        }
        Ok(())
    }

    /// Turn the backlight on and re-drive the expander output
    pub fn backlight_on(&mut self) -> Result<(), B::Error> {
        self.backlight = true;
        self.transfer(self.pins.backlight)
    }

    /// Turn the backlight off and re-drive the expander output
    pub fn backlight_off(&mut self) -> Result<(), B::Error> {
        self.backlight = false;
        self.transfer(0)
    }

    /// Lay a string out one row-sized chunk per row from (0, 0)
    ///
    /// Stops at the string's end; text past the last row is truncated.
    pub fn write_wrapped(&mut self, text: &str) -> Result<(), B::Error> {
        let cols = self.geometry.cols as usize;
        let rows = self.geometry.rows as usize;
        for (row, chunk) in text.as_bytes().chunks(cols).take(rows).enumerate() {
            self.set_cursor(row as u8, 0)?;
            self.write_bytes(chunk)?;
        }
        Ok(())
    }

    /// Scroll `text` leftwards through one row
    ///
    /// Text that fits the row is just written in place. Longer text is
    /// shown as a sliding row-wide window advancing one character per
    /// step, blocking `delay_ms` between steps; the call returns once the
    /// window reaches the end of the string.
    pub fn scroll_row(&mut self, row: u8, text: &str, delay_ms: u32) -> Result<(), B::Error> {
        let cols = self.geometry.cols as usize;
        let bytes = text.as_bytes();

        if bytes.len() <= cols {
            self.set_cursor(row, 0)?;
            return self.write_bytes(bytes);
        }

        for window in bytes.windows(cols) {
            self.set_cursor(row, 0)?;
            self.write_bytes(window)?;
            self.delay.delay_ms(delay_ms);
        }
        Ok(())
    }

    /// Fill every row with consecutive printable ASCII starting at space
    ///
    /// Wiring diagnosis aid: a misaligned nibble shift shows up as a
    /// predictable garbling of this pattern.
    pub fn ascii_test(&mut self) -> Result<(), B::Error> {
        let cols = self.geometry.cols as usize;
        for row in 0..self.geometry.rows {
            self.set_cursor(row, 0)?;
            let base = 32 + row as usize * cols;
            for i in 0..cols {
                self.data((base + i) as u8)?;
            }
        }
        Ok(())
    }

    /// Send one command byte as two nibble transfers plus the command
    /// settle time
    fn command(&mut self, byte: u8) -> Result<(), B::Error> {
        self.write_nibble(byte >> 4, false)?;
        self.write_nibble(byte & 0x0F, false)?;
        self.delay.delay_ms(COMMAND_SETTLE_MS);
        Ok(())
    }

    /// Send one character byte as two nibble transfers plus the data
    /// settle time
    fn data(&mut self, byte: u8) -> Result<(), B::Error> {
        self.write_nibble(byte >> 4, true)?;
        self.write_nibble(byte & 0x0F, true)?;
        self.delay.delay_ms(DATA_SETTLE_MS);
        Ok(())
    }

    /// Present one nibble on the expander and pulse enable to latch it
    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), B::Error> {
        let mut frame = (nibble & 0x0F) << self.pins.nibble_shift;
        if data {
            frame |= self.pins.rs;
        }
        if self.backlight {
            frame |= self.pins.backlight;
        }
        // RW stays low: write direction only

        self.transfer(frame)?;
        self.pulse_enable(frame)
    }

    /// Strobe enable around an already-presented frame
    ///
    /// The frame must be stable on both edges; each hold exceeds the
    /// controller's minimum pulse width.
    fn pulse_enable(&mut self, frame: u8) -> Result<(), B::Error> {
        self.transfer(frame | self.pins.en)?;
        self.delay.delay_ms(HOLD_MS);
        self.transfer(frame & !self.pins.en)?;
        self.delay.delay_ms(HOLD_MS);
        Ok(())
    }

    /// One byte to the expander
    fn transfer(&mut self, byte: u8) -> Result<(), B::Error> {
        self.bus.write(self.addr, &[byte])
    }
}
