//! Adapters from `embedded-hal` 1.0 digital pins
//!
//! Only pins whose error type is [`Infallible`] are accepted, which is the
//! case for on-chip GPIO on every HAL we target. That keeps the sequencer's
//! I/O infallible in the type system instead of swallowing errors at
//! runtime.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Input pin backed by an `embedded-hal` input
pub struct EhInput<P> {
    pin: P,
}

impl<P> EhInput<P>
where
    P: digital::InputPin + digital::ErrorType<Error = Infallible>,
{
    /// Wrap an `embedded-hal` input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin + digital::ErrorType<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}

/// Output pin backed by an `embedded-hal` output
///
/// The driven level is cached so that [`OutputPin::is_set_high`] can take
/// `&self` without requiring `StatefulOutputPin`.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: digital::OutputPin + digital::ErrorType<Error = Infallible>,
{
    /// Wrap an `embedded-hal` output pin, driving it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut out = Self {
            pin,
            high: initial_high,
        };
        out.set_state(initial_high);
        out
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: digital::OutputPin + digital::ErrorType<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
