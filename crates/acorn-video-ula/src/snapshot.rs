//! Save and restore of the complete chip state.

use thiserror::Error;

use crate::divider::CycleCounter;
use crate::pins::Rgb;
use crate::registers::{ControlRegister, Palette};
use crate::shifter::ShiftRegister;
use crate::VideoUla;

/// Every piece of Video ULA state, as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UlaSnapshot {
    /// Control register as written.
    pub control: u8,
    pub palette: [u8; 16],
    pub counter: u8,
    pub shift_register: u8,
    pub display_enable_delayed: bool,
    pub rgb: Rgb,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Cycle counter {0} out of range (must be below 16)")]
    CounterOutOfRange(u8),
    #[error("Palette entry {index} holds {value:#04X} (must be a 4-bit value)")]
    PaletteOutOfRange { index: usize, value: u8 },
}

impl VideoUla {
    /// Capture the chip state. Latched pins are not part of the chip.
    #[must_use]
    pub fn snapshot(&self) -> UlaSnapshot {
        UlaSnapshot {
            control: self.control.to_byte(),
            palette: self.palette.entries(),
            counter: self.counter.value(),
            shift_register: self.shift.value(),
            display_enable_delayed: self.display_enable_delayed,
            rgb: self.rgb,
        }
    }

    /// Rebuild a ULA from a snapshot, with idle pins.
    ///
    /// The outputs of the last tick are not chip state: `outputs()` and the
    /// `crtc_clken`/`pixel_clken` queries read idle until the first tick.
    pub fn restore(snapshot: &UlaSnapshot) -> Result<Self, SnapshotError> {
        if snapshot.counter >= 16 {
            return Err(SnapshotError::CounterOutOfRange(snapshot.counter));
        }
        let mut palette = Palette::default();
        for (index, &value) in snapshot.palette.iter().enumerate() {
            if value > 0x0F {
                return Err(SnapshotError::PaletteOutOfRange { index, value });
            }
            palette.set(index as u8, value);
        }

        Ok(Self {
            control: ControlRegister::from_byte(snapshot.control),
            palette,
            counter: CycleCounter::new(snapshot.counter),
            shift: ShiftRegister::new(snapshot.shift_register),
            display_enable_delayed: snapshot.display_enable_delayed,
            rgb: snapshot.rgb,
            ..Self::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::UlaOutputs;
    use emu_core::{Tickable, Ticks};

    fn busy_ula() -> VideoUla {
        let mut ula = VideoUla::new();
        ula.write(false, 0x9D);
        ula.write(true, 0x1E);
        ula.write(true, 0xF3);
        ula.pins.display_enable = true;
        ula.pins.ram_data = 0xA6;
        ula.tick_n(Ticks::new(11));
        ula
    }

    #[test]
    fn restored_ula_continues_identically() {
        let mut original = busy_ula();
        let mut restored = VideoUla::restore(&original.snapshot()).unwrap();
        restored.pins = original.pins;
        for _ in 0..64 {
            original.tick();
            restored.tick();
            assert_eq!(original.rgb(), restored.rgb());
            assert_eq!(original.snapshot(), restored.snapshot());
        }
    }

    #[test]
    fn restored_outputs_idle_until_first_tick() {
        let mut original = busy_ula();
        let mut restored = VideoUla::restore(&original.snapshot()).unwrap();
        restored.pins = original.pins;
        assert_eq!(restored.outputs(), UlaOutputs::default());
        assert_eq!(restored.rgb(), original.rgb());

        original.tick();
        restored.tick();
        assert_eq!(restored.outputs(), original.outputs());
    }

    #[test]
    fn rejects_bad_counter() {
        let snapshot = UlaSnapshot {
            counter: 16,
            ..UlaSnapshot::default()
        };
        assert_eq!(
            VideoUla::restore(&snapshot),
            Err(SnapshotError::CounterOutOfRange(16))
        );
    }

    #[test]
    fn rejects_bad_palette_entry() {
        let mut snapshot = busy_ula().snapshot();
        snapshot.palette[9] = 0x10;
        let err = VideoUla::restore(&snapshot).unwrap_err();
        assert_eq!(err, SnapshotError::PaletteOutOfRange { index: 9, value: 0x10 });
        assert_eq!(
            err.to_string(),
            "Palette entry 9 holds 0x10 (must be a 4-bit value)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serde_roundtrip() {
        let snapshot = busy_ula().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: UlaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
