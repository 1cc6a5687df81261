//! Acorn Video ULA (BBC Micro).
//!
//! The Video ULA sits between the 6845 CRTC, display RAM and the CPU. It
//! turns bytes fetched from display RAM into one-bit RGB pixels through a
//! 16-entry palette, divides the 16 MHz master clock down to the programmed
//! pixel rate, and generates the CRTC's clock enable.
//!
//! # Standalone IC
//!
//! The chip is modelled at its pins. A host sets [`UlaPins`] and ticks; the
//! ULA never reaches into RAM or the CRTC itself.
//!
//! # Timing
//!
//! - Master clock 16 MHz, one [`VideoUla::clock`] call per master tick
//! - 4-bit cycle counter, period 16 ticks (1 µs)
//! - Fetch on cycle 0 (and cycle 8 with the CRTC at 2 MHz)
//! - Pixel enable every 8, 4, 2 or 1 ticks, per the control register
//! - RGB is registered, with one tick of latency from DISPEN
//!
//! Every tick is computed from the pre-tick state only: register writes,
//! shifts and the output register all commit together at the tick boundary.
//!
//! # Not modelled
//!
//! Cursor, invert and teletext passthrough. The pins exist and are sampled,
//! but have no effect; the cursor and teletext control bits are stored only.

mod colour;
mod divider;
mod pins;
mod registers;
mod resolver;
mod shifter;
mod snapshot;

pub use colour::PHYSICAL_COLOURS;
pub use divider::{COUNTER_PERIOD, CycleCounter};
pub use pins::{Rgb, UlaOutputs, UlaPins};
pub use registers::{ControlRegister, Palette};
pub use resolver::decode_entry;
pub use shifter::ShiftRegister;
pub use snapshot::{SnapshotError, UlaSnapshot};

use emu_core::{MasterClock, Observable, Tickable, Value};

/// Master clock frequency.
pub const MASTER_CLOCK_HZ: u64 = 16_000_000;

/// Master clock driving the ULA.
pub const MASTER_CLOCK: MasterClock = MasterClock::new(MASTER_CLOCK_HZ);

/// Acorn Video ULA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoUla {
    control: ControlRegister,
    palette: Palette,
    counter: CycleCounter,
    shift: ShiftRegister,
    /// DISPEN as sampled on the previous tick.
    display_enable_delayed: bool,
    /// Registered RGB output.
    rgb: Rgb,
    /// Input levels sampled by [`Tickable::tick`].
    pub pins: UlaPins,
    /// Outputs of the most recent tick.
    outputs: UlaOutputs,
}

impl VideoUla {
    /// Create a ULA in its reset state with idle pins.
    #[must_use]
    pub fn new() -> Self {
        Self {
            control: ControlRegister::default(),
            palette: Palette::default(),
            counter: CycleCounter::default(),
            shift: ShiftRegister::default(),
            display_enable_delayed: false,
            rgb: Rgb::BLACK,
            pins: UlaPins::default(),
            outputs: UlaOutputs::default(),
        }
    }

    /// Compute the state after one master tick with `pins` applied.
    ///
    /// Pure: `self` is not modified, and the returned ULA carries the
    /// outputs of this tick. The latched `pins` field is carried over
    /// unchanged; only the `pins` argument is sampled.
    #[must_use]
    pub fn step(&self, pins: &UlaPins) -> (Self, UlaOutputs) {
        if pins.reset {
            if self.snapshot() != UlaSnapshot::default() {
                log::debug!("Video ULA reset");
            }
            let cleared = Self {
                pins: self.pins,
                ..Self::new()
            };
            return (cleared, UlaOutputs::default());
        }

        let control = self.control;
        let pixel_clken = pins.clken && self.counter.pixel_enable(control.pixel_rate);
        let fetch = pixel_clken && self.counter.fetch_due(control.crtc_2mhz);
        let crtc_clken = self.counter.crtc_enable(control.crtc_2mhz);
        let rgb = resolver::resolve(
            self.shift,
            &self.palette,
            control,
            self.display_enable_delayed,
        );

        let outputs = UlaOutputs {
            rgb,
            crtc_clken,
            pixel_clken,
            fetch,
        };

        let mut next = Self {
            control,
            palette: self.palette,
            counter: self.counter.advanced(),
            shift: self.shift.next(pixel_clken, fetch, pins.ram_data),
            display_enable_delayed: pins.display_enable,
            rgb,
            pins: self.pins,
            outputs,
        };
        if pins.cpu_enable {
            next.apply_write(pins.cpu_a0, pins.cpu_data);
        }

        (next, outputs)
    }

    /// Advance one master tick with `pins` applied.
    pub fn clock(&mut self, pins: &UlaPins) -> UlaOutputs {
        let (next, outputs) = self.step(pins);
        *self = next;
        outputs
    }

    /// Advance one master tick with a CPU write on top of the latched pins.
    ///
    /// `a0` low writes the control register, high a palette entry. The new
    /// value is visible from the following tick.
    pub fn write(&mut self, a0: bool, data: u8) -> UlaOutputs {
        let pins = UlaPins {
            cpu_enable: true,
            cpu_a0: a0,
            cpu_data: data,
            ..self.pins
        };
        self.clock(&pins)
    }

    #[must_use]
    pub fn control(&self) -> ControlRegister {
        self.control
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn counter(&self) -> u8 {
        self.counter.value()
    }

    #[must_use]
    pub fn shift_register(&self) -> u8 {
        self.shift.value()
    }

    #[must_use]
    pub fn delayed_display_enable(&self) -> bool {
        self.display_enable_delayed
    }

    /// Registered RGB output.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Outputs of the most recent tick.
    #[must_use]
    pub fn outputs(&self) -> UlaOutputs {
        self.outputs
    }

    /// CRTC clock enable offered on the most recent tick.
    #[must_use]
    pub fn crtc_clken(&self) -> bool {
        self.outputs.crtc_clken
    }

    fn apply_write(&mut self, a0: bool, data: u8) {
        if a0 {
            log::trace!(
                "Video ULA palette write: entry {:X} = {:X}",
                data >> 4,
                data & 0x0F
            );
            self.palette.write(data);
        } else {
            let control = ControlRegister::from_byte(data);
            log::trace!(
                "Video ULA control write {data:#04X}: pixel_rate={} crtc_2mhz={} teletext={} flash={}",
                control.pixel_rate,
                control.crtc_2mhz,
                control.teletext,
                control.flash
            );
            self.control = control;
        }
    }
}

impl Default for VideoUla {
    fn default() -> Self {
        Self::new()
    }
}

impl Tickable for VideoUla {
    fn tick(&mut self) {
        let pins = self.pins;
        self.clock(&pins);
    }
}

impl Observable for VideoUla {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("palette.") {
            let index: u8 = rest.parse().ok().filter(|&i: &u8| i < 16)?;
            return Some(self.palette.get(index).into());
        }
        match path {
            "control" => Some(self.control.to_byte().into()),
            "control.cursor" => Some(
                ((u8::from(self.control.cursor0) << 2)
                    | (u8::from(self.control.cursor1) << 1)
                    | u8::from(self.control.cursor2))
                .into(),
            ),
            "control.crtc_2mhz" => Some(self.control.crtc_2mhz.into()),
            "control.pixel_rate" => Some(self.control.pixel_rate.into()),
            "control.teletext" => Some(self.control.teletext.into()),
            "control.flash" => Some(self.control.flash.into()),
            "palette" => Some(self.palette.entries().to_vec().into()),
            "counter" => Some(self.counter.value().into()),
            "shift_register" => Some(self.shift.value().into()),
            "display_enable_delayed" => Some(self.display_enable_delayed.into()),
            "rgb" => Some(self.rgb.index().into()),
            "rgb.r" => Some(self.rgb.r.into()),
            "rgb.g" => Some(self.rgb.g.into()),
            "rgb.b" => Some(self.rgb.b.into()),
            "crtc_clken" => Some(self.outputs.crtc_clken.into()),
            "pixel_clken" => Some(self.outputs.pixel_clken.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "control",
            "control.cursor",
            "control.crtc_2mhz",
            "control.pixel_rate",
            "control.teletext",
            "control.flash",
            "palette",
            "palette.<0-15>",
            "counter",
            "shift_register",
            "display_enable_delayed",
            "rgb",
            "rgb.r",
            "rgb.g",
            "rgb.b",
            "crtc_clken",
            "pixel_clken",
        ]
    }
}
