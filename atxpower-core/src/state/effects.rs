//! Side effects requested by transitions
//!
//! Transitions never touch hardware. They describe what should change and
//! the caller performs the writes afterwards.

use super::machine::State;

/// Which role the power button's confirmation window plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonWindow {
    /// Short window: plain debounce, a tap is enough (machine off)
    PressToTurnOn,
    /// Long window: the button must be held to be reported (machine on)
    HoldToTurnOff,
}

/// Interval the sequencer timer should be armed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerRequest {
    /// Deadline for power-good after enabling the supply
    PowerUpTimeout,
    /// Minimum reset assertion time
    ResetHold,
    /// Wait for the rails to decay after removing power
    Settle,
}

/// Conditions reported alongside a transition
///
/// Informational only; the transition itself already handles the fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Supply did not report power-good within the power-up timeout
    PowerGoodTimeout,
    /// Power-good dropped while the machine was running
    PowerLost,
}

/// Output writes and reconfiguration requested by one transition
///
/// `None` leaves the corresponding output or setting untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// Power supply enable (true = supply on)
    pub psu_enable: Option<bool>,
    /// Power LED (true = lit)
    pub power_led: Option<bool>,
    /// Reset hold (true = computer held in reset)
    pub reset_hold: Option<bool>,
    /// Re-arm the interval timer
    pub timer: Option<TimerRequest>,
    /// Retune the power button confirmation window
    pub power_button_window: Option<ButtonWindow>,
}

impl Effects {
    /// No writes, no reconfiguration
    pub const NONE: Self = Self {
        psu_enable: None,
        power_led: None,
        reset_hold: None,
        timer: None,
        power_button_window: None,
    };

    /// Set both supply enable and power LED
    pub const fn power(self, on: bool) -> Self {
        Self {
            psu_enable: Some(on),
            power_led: Some(on),
            ..self
        }
    }

    /// Set the reset line
    pub const fn reset(self, held: bool) -> Self {
        Self {
            reset_hold: Some(held),
            ..self
        }
    }

    /// Arm the interval timer
    pub const fn arm(self, request: TimerRequest) -> Self {
        Self {
            timer: Some(request),
            ..self
        }
    }

    /// Retune the power button window
    pub const fn window(self, window: ButtonWindow) -> Self {
        Self {
            power_button_window: Some(window),
            ..self
        }
    }

    /// Check if nothing is requested
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Logical levels of the sequenced outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    /// Power supply enabled
    pub psu_enable: bool,
    /// Power LED lit
    pub power_led: bool,
    /// Computer held in reset
    pub reset_hold: bool,
}

impl Outputs {
    /// Powered down, held in reset. The startup configuration.
    pub const SAFE_OFF: Self = Self {
        psu_enable: false,
        power_led: false,
        reset_hold: true,
    };

    /// Output levels that hold while in `state`
    ///
    /// Applying a transition's effects to `for_state(from)` yields
    /// `for_state(to)`.
    pub const fn for_state(state: State) -> Self {
        match state {
            State::Off | State::WaitOn => Self::SAFE_OFF,
            State::PoweringUp | State::WaitReset | State::Reset => Self {
                psu_enable: true,
                power_led: true,
                reset_hold: true,
            },
            State::Normal => Self {
                psu_enable: true,
                power_led: true,
                reset_hold: false,
            },
            State::WaitOff | State::WaitOff2 => Self {
                psu_enable: false,
                power_led: false,
                reset_hold: false,
            },
        }
    }

    /// Apply the output writes in `effects`
    pub fn apply(self, effects: &Effects) -> Self {
        Self {
            psu_enable: effects.psu_enable.unwrap_or(self.psu_enable),
            power_led: effects.power_led.unwrap_or(self.power_led),
            reset_hold: effects.reset_hold.unwrap_or(self.reset_hold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let effects = Effects::NONE
            .power(true)
            .arm(TimerRequest::PowerUpTimeout)
            .window(ButtonWindow::HoldToTurnOff);

        assert_eq!(effects.psu_enable, Some(true));
        assert_eq!(effects.power_led, Some(true));
        assert_eq!(effects.reset_hold, None);
        assert_eq!(effects.timer, Some(TimerRequest::PowerUpTimeout));
        assert_eq!(effects.power_button_window, Some(ButtonWindow::HoldToTurnOff));
        assert!(!effects.is_empty());
        assert!(Effects::default().is_empty());
    }

    #[test]
    fn test_apply_leaves_untouched_outputs() {
        let outputs = Outputs::for_state(State::Normal).apply(&Effects::NONE.reset(true));
        assert!(outputs.psu_enable);
        assert!(outputs.power_led);
        assert!(outputs.reset_hold);
    }

    #[test]
    fn test_startup_is_safe() {
        assert_eq!(Outputs::for_state(State::Off), Outputs::SAFE_OFF);
        assert!(!Outputs::SAFE_OFF.psu_enable);
        assert!(Outputs::SAFE_OFF.reset_hold);
    }
}
