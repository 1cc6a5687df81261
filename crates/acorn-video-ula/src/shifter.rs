//! Fetch/shift pipeline.
//!
//! The shift register is loaded from display RAM on fetch cycles and
//! otherwise shifted left with 1s entering at bit 0. Both only happen on
//! ticks where the gated pixel enable is high.

/// The 8-bit pixel shift register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftRegister(u8);

impl ShiftRegister {
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Next value given this tick's enables and the RAM data bus.
    #[must_use]
    pub fn next(self, pixel_clken: bool, fetch: bool, ram_data: u8) -> Self {
        if !pixel_clken {
            self
        } else if fetch {
            Self(ram_data)
        } else {
            Self((self.0 << 1) | 0x01)
        }
    }

    /// Palette index from taps 7, 5, 3 and 1 (bit 7 is the index MSB).
    ///
    /// Each tap is the leading bit of one of four interleaved 2-bit fields.
    #[must_use]
    pub fn palette_index(self) -> u8 {
        let v = self.0;
        ((v >> 4) & 0x08) | ((v >> 3) & 0x04) | ((v >> 2) & 0x02) | ((v >> 1) & 0x01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_without_pixel_enable() {
        let s = ShiftRegister::new(0x5A);
        assert_eq!(s.next(false, true, 0xFF), s);
        assert_eq!(s.next(false, false, 0xFF), s);
    }

    #[test]
    fn fetch_loads_ram_byte() {
        assert_eq!(ShiftRegister::new(0x00).next(true, true, 0xC3).value(), 0xC3);
    }

    #[test]
    fn shift_fills_ones() {
        let mut s = ShiftRegister::new(0x00);
        let mut seen = Vec::new();
        for _ in 0..8 {
            s = s.next(true, false, 0xAA);
            seen.push(s.value());
        }
        assert_eq!(seen, [0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF]);
    }

    #[test]
    fn palette_index_taps() {
        assert_eq!(ShiftRegister::new(0x80).palette_index(), 0b1000);
        assert_eq!(ShiftRegister::new(0x20).palette_index(), 0b0100);
        assert_eq!(ShiftRegister::new(0x08).palette_index(), 0b0010);
        assert_eq!(ShiftRegister::new(0x02).palette_index(), 0b0001);
        // Even bits are never tapped.
        assert_eq!(ShiftRegister::new(0x55).palette_index(), 0);
        assert_eq!(ShiftRegister::new(0xAA).palette_index(), 0x0F);
        assert_eq!(ShiftRegister::new(0x88).palette_index(), 0b1010);
    }

    #[test]
    fn every_index_reachable() {
        let mut seen = [false; 16];
        for v in 0..=255u8 {
            seen[ShiftRegister::new(v).palette_index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
