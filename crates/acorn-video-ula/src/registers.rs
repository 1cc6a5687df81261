//! Control register and palette.
//!
//! | A0 | Register | Write format                                   |
//! |----|----------|------------------------------------------------|
//! | 0  | Control  | `C0 C1 C2 2M R1 R0 TT FL` (bit 7 .. bit 0)     |
//! | 1  | Palette  | `IIII VVVV`: index in the high nibble, value low |
//!
//! Control fields: `C0-C2` cursor shape, `2M` CRTC clocked at 2 MHz,
//! `R1 R0` pixel rate, `TT` teletext, `FL` flash.
//!
//! Palette values: bit 3 flash group, bits 2-0 blue, green, red, stored
//! inverted.

/// Decoded control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlRegister {
    pub cursor0: bool,
    pub cursor1: bool,
    pub cursor2: bool,
    /// Fetch from the CRTC twice per counter period instead of once.
    pub crtc_2mhz: bool,
    /// Pixel clock divider select: the pixel enable fires every `8 >> rate` ticks.
    pub pixel_rate: u8,
    /// Stored only; teletext passthrough is not modelled.
    pub teletext: bool,
    /// Invert palette entries in the flash group.
    pub flash: bool,
}

impl ControlRegister {
    /// Decode a byte written with A0 low.
    #[must_use]
    pub fn from_byte(value: u8) -> Self {
        Self {
            cursor0: value & 0x80 != 0,
            cursor1: value & 0x40 != 0,
            cursor2: value & 0x20 != 0,
            crtc_2mhz: value & 0x10 != 0,
            pixel_rate: (value >> 2) & 0x03,
            teletext: value & 0x02 != 0,
            flash: value & 0x01 != 0,
        }
    }

    /// Re-encode as the byte that would produce this register.
    #[must_use]
    pub fn to_byte(self) -> u8 {
        (u8::from(self.cursor0) << 7)
            | (u8::from(self.cursor1) << 6)
            | (u8::from(self.cursor2) << 5)
            | (u8::from(self.crtc_2mhz) << 4)
            | ((self.pixel_rate & 0x03) << 2)
            | (u8::from(self.teletext) << 1)
            | u8::from(self.flash)
    }

    /// Master ticks between pixel enables (8, 4, 2 or 1).
    #[must_use]
    pub fn pixel_divisor(self) -> u8 {
        8 >> (self.pixel_rate & 0x03)
    }

    /// Display RAM fetches per 16-tick counter period.
    #[must_use]
    pub fn fetches_per_period(self) -> u8 {
        if self.crtc_2mhz { 2 } else { 1 }
    }
}

/// Sixteen 4-bit palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    entries: [u8; 16],
}

impl Palette {
    /// Entry at `index` (low nibble of `index` is used).
    #[must_use]
    pub fn get(&self, index: u8) -> u8 {
        self.entries[(index & 0x0F) as usize]
    }

    /// Store the low nibble of `value` at `index`.
    pub fn set(&mut self, index: u8, value: u8) {
        self.entries[(index & 0x0F) as usize] = value & 0x0F;
    }

    /// Apply a byte written with A0 high.
    pub fn write(&mut self, value: u8) {
        self.set(value >> 4, value & 0x0F);
    }

    #[must_use]
    pub fn entries(&self) -> [u8; 16] {
        self.entries
    }
}
