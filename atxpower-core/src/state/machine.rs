//! State machine definition
//!
//! All output behavior is a function of the current state and the inputs
//! sampled in the current tick.

use super::effects::{ButtonWindow, Effects, Fault, Outputs, TimerRequest};
use super::inputs::Inputs;

/// Sequencer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Powered down, reset asserted, waiting for a power button press
    Off,
    /// Power button pressed, waiting for release before powering up
    WaitOn,
    /// Supply enabled, computer held in reset, waiting for power-good
    PoweringUp,
    /// Computer running with reset released
    Normal,
    /// Power button held while running, waiting for release
    WaitOff,
    /// Power removed, waiting for the rails to settle
    WaitOff2,
    /// Reset button pressed while running, waiting for release
    WaitReset,
    /// Reset asserted for the minimum hold time
    Reset,
}

/// Result of a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// State left
    pub from: State,
    /// State entered
    pub to: State,
    /// Writes and reconfiguration to perform
    pub effects: Effects,
    /// Fault detected by this transition, if any
    pub fault: Option<Fault>,
}

impl Transition {
    fn new(from: State, to: State, effects: Effects) -> Self {
        Self {
            from,
            to,
            effects,
            fault: None,
        }
    }

    fn with_fault(mut self, fault: Fault) -> Self {
        self.fault = Some(fault);
        self
    }
}

impl State {
    /// Every state, in sequencing order
    pub const ALL: [State; 8] = [
        State::Off,
        State::WaitOn,
        State::PoweringUp,
        State::Normal,
        State::WaitOff,
        State::WaitOff2,
        State::WaitReset,
        State::Reset,
    ];

    /// Check if the supply is enabled in this state
    pub fn psu_enabled(&self) -> bool {
        Outputs::for_state(*self).psu_enable
    }

    /// Check if the computer is held in reset in this state
    pub fn holds_reset(&self) -> bool {
        Outputs::for_state(*self).reset_hold
    }

    /// Check if this state only waits for a button to be released
    pub fn is_waiting_for_release(&self) -> bool {
        matches!(self, State::WaitOn | State::WaitOff | State::WaitReset)
    }

    /// Check if this state is waiting on the interval timer
    pub fn is_timed(&self) -> bool {
        matches!(self, State::PoweringUp | State::WaitOff2 | State::Reset)
    }

    /// Evaluate one tick
    ///
    /// Returns the transition to take, or `None` to stay in the current
    /// state. At most one transition is taken per tick; within a state the
    /// first matching condition wins.
    pub fn transition(self, inputs: Inputs) -> Option<Transition> {
        use State::*;

        let Inputs {
            power_button,
            reset_button,
            power_good,
            timer_elapsed,
        } = inputs;

        let step = |to: State, effects: Effects| Some(Transition::new(self, to, effects));

        match self {
            Off if power_button => step(WaitOn, Effects::NONE),

            WaitOn if !power_button => step(
                PoweringUp,
                Effects::NONE
                    .power(true)
                    .arm(TimerRequest::PowerUpTimeout)
                    .window(ButtonWindow::HoldToTurnOff),
            ),

            // Power-good is checked before the timeout so it wins a same-tick race
            PoweringUp if power_good => step(Reset, Effects::NONE.arm(TimerRequest::ResetHold)),
            PoweringUp if timer_elapsed => step(
                Off,
                Effects::NONE
                    .power(false)
                    .window(ButtonWindow::PressToTurnOn),
            )
            .map(|t| t.with_fault(Fault::PowerGoodTimeout)),

            // Power button is on the hold window here, so this is a long press.
            // Reset stays released until the rails have settled.
            Normal if power_button => step(
                WaitOff,
                Effects::NONE
                    .power(false)
                    .window(ButtonWindow::PressToTurnOn),
            ),
            Normal if reset_button => step(WaitReset, Effects::NONE.reset(true)),
            Normal if !power_good => step(
                Off,
                Effects::NONE
                    .power(false)
                    .reset(true)
                    .window(ButtonWindow::PressToTurnOn),
            )
            .map(|t| t.with_fault(Fault::PowerLost)),

            WaitOff if !power_button => step(WaitOff2, Effects::NONE.arm(TimerRequest::Settle)),

            // Power-good is not re-checked: the supply is assumed to be down
            // once the settle time has passed.
            WaitOff2 if timer_elapsed => step(Off, Effects::NONE.reset(true)),

            WaitReset if !reset_button => step(Reset, Effects::NONE.arm(TimerRequest::ResetHold)),

            Reset if timer_elapsed => step(Normal, Effects::NONE.reset(false)),

            _ => None,
        }
    }
}
