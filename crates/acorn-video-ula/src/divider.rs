//! Free-running cycle counter and the enables derived from it.
//!
//! One 4-bit counter schedules everything: the pixel divider reads its low
//! bits, the fetch and CRTC enables read all four. Deriving every enable
//! from the same value keeps fetch and pixel output phase-locked.
//!
//! ```text
//! counter     0 1 2 3 4 5 6 7 8 9 A B C D E F
//! fetch       *               (*)
//! crtc_clken                (*)              *
//! ```
//!
//! Bracketed pulses only occur with the CRTC at 2 MHz.

/// Master ticks in one counter period.
pub const COUNTER_PERIOD: u8 = 16;

/// The 4-bit master cycle counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleCounter(u8);

impl CycleCounter {
    /// Counter holding `value` (low nibble).
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value & 0x0F)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Value after one master tick; wraps at 16.
    #[must_use]
    pub fn advanced(self) -> Self {
        Self((self.0 + 1) & 0x0F)
    }

    /// Divided pixel enable for `pixel_rate` (0-3).
    ///
    /// Fires when the low `3 - pixel_rate` bits are all clear, giving a
    /// period of `8 >> pixel_rate` ticks aligned to the fetch cycles.
    #[must_use]
    pub fn pixel_enable(self, pixel_rate: u8) -> bool {
        let mask = (8u8 >> (pixel_rate & 0x03)) - 1;
        self.0 & mask == 0
    }

    /// CRTC clock enable: cycle 15 always, cycle 7 as well at 2 MHz.
    #[must_use]
    pub fn crtc_enable(self, crtc_2mhz: bool) -> bool {
        self.0 & 0x07 == 0x07 && (self.0 & 0x08 != 0 || crtc_2mhz)
    }

    /// Shift register load: cycle 0 always, cycle 8 as well at 2 MHz.
    #[must_use]
    pub fn fetch_due(self, crtc_2mhz: bool) -> bool {
        self.0 & 0x07 == 0 && (self.0 & 0x08 == 0 || crtc_2mhz)
    }
}
