//! Sequencer
//!
//! Owns the current state and the shared interval timer, and turns the
//! pure transition function into a per-tick update.

use crate::config::TimingConfig;
use crate::state::{ButtonWindow, Inputs, Outputs, Readings, State, Transition};
use crate::timer::IntervalTimer;

/// Power/reset sequencer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequencer {
    /// Current state
    state: State,
    /// Timer shared by all timed states
    timer: IntervalTimer,
    /// Timing constants
    timing: TimingConfig,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(TimingConfig::DEFAULT)
    }
}

impl Sequencer {
    /// Power button window in effect at startup
    pub const INITIAL_BUTTON_WINDOW: ButtonWindow = ButtonWindow::PressToTurnOn;

    /// Create a sequencer in the `Off` state
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            state: State::Off,
            timer: IntervalTimer::new(),
            timing,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the timing constants
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Get the interval timer
    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    /// Output levels for the current state
    pub fn outputs(&self) -> Outputs {
        Outputs::for_state(self.state)
    }

    /// Evaluate one tick
    ///
    /// `readings` must already be debounced for this tick. Arms the timer
    /// when the transition asks for it and returns the transition so the
    /// caller can perform the output writes.
    pub fn update(&mut self, readings: Readings, now_ms: u32) -> Option<Transition> {
        let inputs = Inputs::new(readings, self.timer.is_elapsed(now_ms));
        let transition = self.state.transition(inputs)?;

        if let Some(request) = transition.effects.timer {
            self.timer.arm(now_ms, self.timing.timer_ms(request));
        }
        self.state = transition.to;

        Some(transition)
    }
}
