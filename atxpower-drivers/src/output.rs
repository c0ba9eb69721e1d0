//! GPIO output lines
//!
//! Supply enable, reset hold and LEDs are all plain on/off lines driven
//! directly or through a transistor. The line can be configured as
//! active-high (default) or active-low.

use atxpower_hal::OutputPin;

/// Polarity-aware output line
pub struct OutputLine<P> {
    pin: P,
    /// If true, line ON = pin LOW
    inverted: bool,
    /// Current logical state (true = on / asserted)
    on: bool,
}

impl<P: OutputPin> OutputLine<P> {
    /// Create a new output line, driven to `initial`
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the line is ON when the pin is LOW
    /// - `initial`: Logical state to drive immediately
    pub fn new(pin: P, inverted: bool, initial: bool) -> Self {
        let mut line = Self {
            pin,
            inverted,
            on: initial,
        };
        line.set_on(initial);
        line
    }

    /// Create an active-high output line
    pub fn new_active_high(pin: P, initial: bool) -> Self {
        Self::new(pin, false, initial)
    }

    /// Create an active-low output line
    pub fn new_active_low(pin: P, initial: bool) -> Self {
        Self::new(pin, true, initial)
    }

    /// Drive the line on or off
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        self.pin.set_state(on != self.inverted);
    }

    /// Flip the logical state
    pub fn toggle(&mut self) {
        self.set_on(!self.on);
    }

    /// Check if the line is currently on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Check if the pin is driven high
    pub fn is_pin_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
