//! Palette lookup, flash and display-enable gating.

use crate::pins::Rgb;
use crate::registers::{ControlRegister, Palette};
use crate::shifter::ShiftRegister;

/// Palette entry bit marking the flash group.
const FLASH_GROUP: u8 = 0x08;

/// Decode a stored palette value into a colour.
///
/// Colour bits are stored inverted. When `flashing` is set and the entry is
/// in the flash group every channel is inverted again.
#[must_use]
pub fn decode_entry(entry: u8, flashing: bool) -> Rgb {
    let steady = Rgb::from_index(!entry & 0x07);
    if flashing && entry & FLASH_GROUP != 0 {
        steady.inverted()
    } else {
        steady
    }
}

/// The colour registered on this tick.
///
/// Reads only pre-tick state. Cursor, invert and teletext passthrough are
/// not modelled and do not feed in here.
#[must_use]
pub fn resolve(
    shift: ShiftRegister,
    palette: &Palette,
    control: ControlRegister,
    display_enable_delayed: bool,
) -> Rgb {
    if !display_enable_delayed {
        return Rgb::BLACK;
    }
    decode_entry(palette.get(shift.palette_index()), control.flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stored_inverted() {
        assert_eq!(decode_entry(0x00, false), Rgb::WHITE);
        assert_eq!(decode_entry(0x07, false), Rgb::BLACK);
        // 0b0110: blue and green stored set, so only red shows.
        assert_eq!(decode_entry(0x06, false), Rgb { r: true, g: false, b: false });
        assert_eq!(decode_entry(0x05, false), Rgb { r: false, g: true, b: false });
    }

    #[test]
    fn flash_formula_exhaustive() {
        for entry in 0..16u8 {
            for flash in [false, true] {
                let group = entry & FLASH_GROUP != 0;
                let rgb = decode_entry(entry, flash);
                assert_eq!(rgb.r, (group && flash) ^ (entry & 0x01 == 0));
                assert_eq!(rgb.g, (group && flash) ^ (entry & 0x02 == 0));
                assert_eq!(rgb.b, (group && flash) ^ (entry & 0x04 == 0));
            }
        }
    }

    #[test]
    fn flash_ignored_outside_flash_group() {
        for entry in 0..8u8 {
            assert_eq!(decode_entry(entry, true), decode_entry(entry, false));
        }
    }

    #[test]
    fn display_disabled_forces_black() {
        let palette = Palette::default();
        let control = ControlRegister::from_byte(0x01);
        for v in 0..=255u8 {
            let shift = ShiftRegister::new(v);
            assert_eq!(resolve(shift, &palette, control, false), Rgb::BLACK);
            assert_eq!(resolve(shift, &palette, control, true), Rgb::WHITE);
        }
    }

    #[test]
    fn looks_up_tapped_entry() {
        let mut palette = Palette::default();
        for i in 0..16 {
            palette.set(i, i);
        }
        let control = ControlRegister::default();
        for v in 0..=255u8 {
            let shift = ShiftRegister::new(v);
            let expected = decode_entry(shift.palette_index(), false);
            assert_eq!(resolve(shift, &palette, control, true), expected);
        }
    }
}
