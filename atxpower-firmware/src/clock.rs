//! Millisecond clock backed by the embassy time driver

use atxpower_hal::Clock;
use embassy_time::Instant;

/// Uptime clock
///
/// Truncates the 64-bit tick count to `u32` milliseconds. The sequencer
/// only ever takes wrapping differences, so the wrap after ~49 days is
/// harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
