//! GPIO pin abstractions
//!
//! Raw logic levels only. Polarity (active-low buttons, active-high
//! outputs) is applied one layer up, in `atxpower-drivers`.

/// Digital output pin
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Toggle the line
    fn toggle(&mut self) {
        let high = self.is_set_high();
        self.set_state(!high);
    }

    /// Check if the line is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the line is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Takes `&mut self` because sampling a pin through `embedded-hal` 1.0
/// requires mutable access.
pub trait InputPin {
    /// Check if the line reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}
