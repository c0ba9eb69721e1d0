//! One-shot interval timer

/// One-shot interval timer
///
/// Armed with a start timestamp and a duration; exposes only whether the
/// duration has elapsed. Re-arming overwrites both. Elapsed time is computed
/// with wrapping subtraction so a wrapping millisecond counter is fine for
/// intervals shorter than ~49 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTimer {
    start_ms: u32,
    duration_ms: u32,
    armed: bool,
}

impl IntervalTimer {
    /// Create a timer that has never been armed
    pub const fn new() -> Self {
        Self {
            start_ms: 0,
            duration_ms: 0,
            armed: false,
        }
    }

    /// Arm (or re-arm) the timer
    pub fn arm(&mut self, now_ms: u32, duration_ms: u32) {
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        self.armed = true;
    }

    /// Check if the armed duration has elapsed
    ///
    /// A timer that was never armed reports `false`.
    pub fn is_elapsed(&self, now_ms: u32) -> bool {
        self.armed && now_ms.wrapping_sub(self.start_ms) >= self.duration_ms
    }

    /// Check if the timer has been armed at least once
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Milliseconds left until the timer elapses (0 once elapsed or unarmed)
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.duration_ms
            .saturating_sub(now_ms.wrapping_sub(self.start_ms))
    }
}
