//! Debounced digital inputs

use atxpower_core::Debouncer;
use atxpower_hal::InputPin;

/// A physical input with its own debounce filter
///
/// Reports logical activity: for an active-low input (button to ground with
/// a pull-up) a low line reads as active.
pub struct DebouncedInput<P> {
    pin: P,
    /// If true, input is active when the line is LOW
    active_low: bool,
    debouncer: Debouncer,
}

impl<P: InputPin> DebouncedInput<P> {
    /// Create a debounced input
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to sample
    /// - `active_low`: If true, the input is active when the pin reads LOW
    /// - `confirm_window_ms`: Initial debounce window
    pub fn new(pin: P, active_low: bool, confirm_window_ms: u32) -> Self {
        Self {
            pin,
            active_low,
            debouncer: Debouncer::new(confirm_window_ms),
        }
    }

    /// Create an active-low input (pulled up, switch to ground)
    pub fn new_active_low(pin: P, confirm_window_ms: u32) -> Self {
        Self::new(pin, true, confirm_window_ms)
    }

    /// Create an active-high input
    pub fn new_active_high(pin: P, confirm_window_ms: u32) -> Self {
        Self::new(pin, false, confirm_window_ms)
    }

    /// Sample the pin once and feed the debouncer
    ///
    /// Returns `true` if the stable level changed.
    pub fn advance(&mut self, now_ms: u32) -> bool {
        let active = self.pin.is_high() != self.active_low;
        self.debouncer.advance(active, now_ms)
    }

    /// Debounced activity (pressed / asserted)
    pub fn is_active(&self) -> bool {
        self.debouncer.is_stable()
    }

    /// Change the debounce window from the next level change on
    pub fn set_confirm_window(&mut self, window_ms: u32) {
        self.debouncer.set_confirm_window(window_ms);
    }

    /// Window that will apply to the next level change
    pub fn confirm_window_ms(&self) -> u32 {
        self.debouncer.confirm_window_ms()
    }

    /// Get the underlying filter
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}
