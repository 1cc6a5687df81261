//! Input pins sampled each master tick, and the registered outputs.

use crate::colour::PHYSICAL_COLOURS;

/// Every input the Video ULA samples on a master tick.
///
/// Hosts drive these like the external lines of a real package: set the
/// levels, then tick. Levels persist until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UlaPins {
    /// Synchronous reset. While high the chip is held in its cleared state.
    pub reset: bool,
    /// Base clock enable: high on ticks that belong to the display rather
    /// than the CPU. ANDed with the internal pixel divider.
    pub clken: bool,
    /// CPU register select (chip select qualified by the bus write strobe).
    pub cpu_enable: bool,
    /// Address line A0: low selects the control register, high the palette.
    pub cpu_a0: bool,
    /// CPU data bus.
    pub cpu_data: u8,
    /// Display RAM data bus, latched on fetch cycles.
    pub ram_data: u8,
    /// DISPEN from the CRTC.
    pub display_enable: bool,
    /// CURSOR from the CRTC. Sampled but has no effect.
    pub cursor: bool,
    /// Active-low invert. Sampled but has no effect.
    pub invert_n: bool,
    /// Teletext red passthrough. Sampled but has no effect.
    pub r_in: bool,
    /// Teletext green passthrough. Sampled but has no effect.
    pub g_in: bool,
    /// Teletext blue passthrough. Sampled but has no effect.
    pub b_in: bool,
}

impl Default for UlaPins {
    fn default() -> Self {
        Self {
            reset: false,
            clken: true,
            cpu_enable: false,
            cpu_a0: false,
            cpu_data: 0,
            ram_data: 0,
            display_enable: false,
            cursor: false,
            invert_n: true,
            r_in: false,
            g_in: false,
            b_in: false,
        }
    }
}

/// One-bit-per-channel colour, as driven on the R, G and B output pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: false,
        g: false,
        b: false,
    };

    pub const WHITE: Self = Self {
        r: true,
        g: true,
        b: true,
    };

    /// Physical colour number: `B << 2 | G << 1 | R`.
    #[must_use]
    pub fn index(self) -> u8 {
        (u8::from(self.b) << 2) | (u8::from(self.g) << 1) | u8::from(self.r)
    }

    /// Build from a physical colour number (bits above 2 are ignored).
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self {
            r: index & 0x01 != 0,
            g: index & 0x02 != 0,
            b: index & 0x04 != 0,
        }
    }

    /// ARGB32 value for framebuffer rendering.
    #[must_use]
    pub fn to_argb32(self) -> u32 {
        PHYSICAL_COLOURS[self.index() as usize]
    }

    /// Channel-wise complement.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            r: !self.r,
            g: !self.g,
            b: !self.b,
        }
    }
}

/// What the chip drives after a master tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UlaOutputs {
    /// Registered RGB output.
    pub rgb: Rgb,
    /// Clock enable offered to the CRTC on this tick.
    pub crtc_clken: bool,
    /// Gated pixel enable used by the shifter on this tick.
    pub pixel_clken: bool,
    /// The shifter loaded a new byte from display RAM on this tick.
    pub fetch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_index_roundtrip() {
        for i in 0..8 {
            assert_eq!(Rgb::from_index(i).index(), i);
        }
        assert_eq!(Rgb::BLACK.index(), 0);
        assert_eq!(Rgb::WHITE.index(), 7);
        assert_eq!(Rgb::from_index(1), Rgb { r: true, g: false, b: false });
    }

    #[test]
    fn inverted_is_complement() {
        assert_eq!(Rgb::BLACK.inverted(), Rgb::WHITE);
        assert_eq!(Rgb::from_index(1).inverted().index(), 6);
    }

    #[test]
    fn default_pins_are_idle() {
        let pins = UlaPins::default();
        assert!(!pins.reset);
        assert!(pins.clken);
        assert!(!pins.cpu_enable);
        assert!(!pins.display_enable);
    }
}
