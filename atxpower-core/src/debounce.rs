//! Input debouncing
//!
//! A [`Debouncer`] turns a noisy sampled level into a stable one. A new level
//! is accepted only once it has been sampled unchanged for the whole
//! confirmation window; any flip in between restarts the window.
//!
//! The same filter serves two purposes depending on the window length:
//! with a short window it rejects contact bounce, with a long window it
//! only reports a button that has been *held* that long.

use crate::config::timing::DEBOUNCE_MS;

/// Confirmation window in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Settling {
    /// Timestamp of the raw level change that started the window
    since_ms: u32,
    /// Window length captured when the window started
    window_ms: u32,
}

/// Debounce filter for one digital input
///
/// The filter is pure: callers sample the input and pass the level in
/// together with the current time. Levels are logical (`true` = pressed or
/// asserted), polarity is handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Last sampled level
    raw: bool,
    /// Last confirmed level
    stable: bool,
    /// Running confirmation window, if a raw change is being confirmed
    settling: Option<Settling>,
    /// Window applied to the next raw change
    confirm_window_ms: u32,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}

impl Debouncer {
    /// Create a debouncer that starts released/deasserted
    pub const fn new(confirm_window_ms: u32) -> Self {
        Self::with_level(false, confirm_window_ms)
    }

    /// Create a debouncer with a known initial level
    pub const fn with_level(initial: bool, confirm_window_ms: u32) -> Self {
        Self {
            raw: initial,
            stable: initial,
            settling: None,
            confirm_window_ms,
        }
    }

    /// Feed one sample
    ///
    /// Never blocks. Returns `true` if the stable level changed on this
    /// sample.
    pub fn advance(&mut self, level: bool, now_ms: u32) -> bool {
        if level != self.raw {
            self.raw = level;
            self.settling = Some(Settling {
                since_ms: now_ms,
                window_ms: self.confirm_window_ms,
            });
            return false;
        }

        match self.settling {
            Some(settling) if now_ms.wrapping_sub(settling.since_ms) >= settling.window_ms => {
                self.settling = None;
                let changed = self.stable != self.raw;
                self.stable = self.raw;
                changed
            }
            _ => false,
        }
    }

    /// Current confirmed level
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Last sampled level, confirmed or not
    pub fn raw(&self) -> bool {
        self.raw
    }

    /// Check if a raw change is waiting for confirmation
    pub fn is_settling(&self) -> bool {
        self.settling.is_some()
    }

    /// Window that will apply to the next raw change
    pub fn confirm_window_ms(&self) -> u32 {
        self.confirm_window_ms
    }

    /// Change the confirmation window
    ///
    /// Takes effect from the next raw level change. A window already
    /// running keeps the length it started with.
    pub fn set_confirm_window(&mut self, window_ms: u32) {
        self.confirm_window_ms = window_ms;
    }
}
