//! Master clock configuration.

use crate::Ticks;

/// Master clock configuration for a system.
///
/// Each system has a master crystal that drives all timing. Components may
/// run at divided rates, but everything derives from this frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterClock {
    /// Crystal frequency in Hz (e.g. `16_000_000` for the BBC Micro video clock).
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Ticks per frame at the given frame rate (integer division).
    #[must_use]
    pub const fn ticks_per_frame(&self, frames_per_second: u64) -> Ticks {
        Ticks::new(self.frequency_hz / frames_per_second)
    }

    /// Frequency of an enable that fires once every `divisor` master ticks.
    #[must_use]
    pub const fn divided_hz(&self, divisor: u64) -> u64 {
        self.frequency_hz / divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_mhz_divisions() {
        let clock = MasterClock::new(16_000_000);
        assert_eq!(clock.ticks_per_frame(50), Ticks::new(320_000));
        assert_eq!(clock.divided_hz(16), 1_000_000);
        assert_eq!(clock.divided_hz(8), 2_000_000);
    }
}
