//! Display geometry and DDRAM address mapping
//!
//! HD44780 DDRAM addresses are not linear across rows; each module family
//! has its own fixed row-base table. The two common layouts are tabulated
//! here; anything else falls back to the 2-row linear map. A 20x2 or
//! 16x4 module may need its own table entry in `row_base`.

/// Character cell grid of the attached module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Columns per row
    pub cols: u8,
    /// Number of rows
    pub rows: u8,
}

impl Geometry {
    /// Common 16x2 module
    pub const C16X2: Self = Self { cols: 16, rows: 2 };

    /// Common 20x4 module
    pub const C20X4: Self = Self { cols: 20, rows: 4 };

    /// Clamp a cell reference to the last valid index on each axis
    ///
    /// Out-of-range input never errors and never wraps.
    pub fn clamp(&self, row: u8, col: u8) -> (u8, u8) {
        (row.min(self.rows - 1), col.min(self.cols - 1))
    }

    /// DDRAM address of a cell, clamping out-of-range input
    pub fn ddram_address(&self, row: u8, col: u8) -> u8 {
        let (row, col) = self.clamp(row, col);
        self.row_base(row) + col
    }

    /// Row base address from the module family table
    fn row_base(&self, row: u8) -> u8 {
        match (self.cols, self.rows) {
            (16, 2) => [0x00, 0x40][row as usize],
            (20, 4) => [0x00, 0x40, 0x14, 0x54][row as usize],
            // Fallback: 2-row linear map
            _ => {
                if row == 0 {
                    0x00
                } else {
                    0x40
                }
            }
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::C16X2
    }
}
