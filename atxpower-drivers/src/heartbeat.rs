//! Status LED heartbeat
//!
//! Blinks the status LED from the polling loop so a stuck loop is visible.
//! Independent of the sequencer state.

use atxpower_core::IntervalTimer;

/// Periodic toggle driven by the polling loop
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Heartbeat {
    timer: IntervalTimer,
    period_ms: u32,
    lit: bool,
}

impl Heartbeat {
    /// Create a heartbeat toggling every `period_ms`, starting unlit
    pub fn new(period_ms: u32, now_ms: u32) -> Self {
        let mut timer = IntervalTimer::new();
        timer.arm(now_ms, period_ms);
        Self {
            timer,
            period_ms,
            lit: false,
        }
    }

    /// Advance the heartbeat
    ///
    /// Returns the new LED state when it toggles, `None` otherwise.
    pub fn poll(&mut self, now_ms: u32) -> Option<bool> {
        if !self.timer.is_elapsed(now_ms) {
            return None;
        }
        self.timer.arm(now_ms, self.period_ms);
        self.lit = !self.lit;
        Some(self.lit)
    }

    /// Current LED state
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
