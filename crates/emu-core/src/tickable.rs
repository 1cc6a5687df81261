//! Trait for components that can be advanced by clock ticks.

use crate::Ticks;

/// A component that can be advanced by clock ticks.
///
/// Components with input pins latch them as state before ticking; `tick`
/// samples whatever is on the pins at that moment.
pub trait Tickable {
    /// Advance the component by one master clock tick.
    fn tick(&mut self);

    /// Advance the component by multiple ticks.
    ///
    /// Default implementation calls `tick()` in a loop. Components may
    /// override for efficiency, but must produce identical results.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
