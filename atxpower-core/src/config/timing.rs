//! Timing constants for the sequencer
//!
//! All durations are in milliseconds.

use core::fmt;

use crate::state::{ButtonWindow, TimerRequest};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Power button window while the machine is off (debounce filter)
pub const PRESS_TO_TURN_ON_MS: u32 = 100;

/// Power button window while the machine is on (hold gate)
pub const HOLD_TO_TURN_OFF_MS: u32 = 1000;

/// Minimum time the reset line is held asserted
pub const RESET_HOLD_MS: u32 = 500;

/// Time allowed for the supply to report power-good
pub const POWER_UP_TIMEOUT_MS: u32 = 5000;

/// Wait after removing power before re-asserting reset
pub const SETTLE_MS: u32 = 500;

/// Debounce window for inputs without a context-specific window
pub const DEBOUNCE_MS: u32 = 50;

/// Status LED toggle period
pub const HEARTBEAT_MS: u32 = 500;

/// Polling loop period
pub const POLL_INTERVAL_MS: u32 = 1;

/// Timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Power button confirmation window used to detect a press (short)
    pub press_to_turn_on_ms: u32,
    /// Power button confirmation window used to detect a hold (long)
    pub hold_to_turn_off_ms: u32,
    /// Minimum reset assertion time
    pub reset_hold_ms: u32,
    /// Power-good deadline after enabling the supply
    pub power_up_timeout_ms: u32,
    /// Settle time between power removal and reset assertion
    pub settle_ms: u32,
    /// Default debounce window (reset button, power-good)
    pub debounce_ms: u32,
    /// Status LED heartbeat half-period
    pub heartbeat_ms: u32,
    /// Polling loop period
    pub poll_interval_ms: u32,
}

/// Configuration field, used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    PressToTurnOn,
    HoldToTurnOff,
    ResetHold,
    PowerUpTimeout,
    Settle,
    Debounce,
    Heartbeat,
    PollInterval,
}

impl Field {
    /// Key name as written in the configuration file
    pub fn key(&self) -> &'static str {
        match self {
            Field::PressToTurnOn => "press_to_turn_on_ms",
            Field::HoldToTurnOff => "hold_to_turn_off_ms",
            Field::ResetHold => "reset_hold_ms",
            Field::PowerUpTimeout => "power_up_timeout_ms",
            Field::Settle => "settle_ms",
            Field::Debounce => "debounce_ms",
            Field::Heartbeat => "heartbeat_ms",
            Field::PollInterval => "poll_interval_ms",
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A duration that must be non-zero is zero
    ZeroDuration(Field),
    /// The hold window must be strictly longer than the press window,
    /// otherwise a tap would power the machine off
    HoldNotLongerThanPress,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration(field) => write!(f, "{} must be greater than 0", field.key()),
            ConfigError::HoldNotLongerThanPress => {
                write!(f, "hold_to_turn_off_ms must be greater than press_to_turn_on_ms")
            }
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TimingConfig {
    /// Factory timing
    pub const DEFAULT: Self = Self {
        press_to_turn_on_ms: PRESS_TO_TURN_ON_MS,
        hold_to_turn_off_ms: HOLD_TO_TURN_OFF_MS,
        reset_hold_ms: RESET_HOLD_MS,
        power_up_timeout_ms: POWER_UP_TIMEOUT_MS,
        settle_ms: SETTLE_MS,
        debounce_ms: DEBOUNCE_MS,
        heartbeat_ms: HEARTBEAT_MS,
        poll_interval_ms: POLL_INTERVAL_MS,
    };

    /// Check the configuration for values the sequencer cannot work with
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            (self.press_to_turn_on_ms, Field::PressToTurnOn),
            (self.hold_to_turn_off_ms, Field::HoldToTurnOff),
            (self.reset_hold_ms, Field::ResetHold),
            (self.power_up_timeout_ms, Field::PowerUpTimeout),
            (self.settle_ms, Field::Settle),
            (self.debounce_ms, Field::Debounce),
            (self.heartbeat_ms, Field::Heartbeat),
            (self.poll_interval_ms, Field::PollInterval),
        ];

        if let Some((_, field)) = durations.iter().find(|(ms, _)| *ms == 0) {
            return Err(ConfigError::ZeroDuration(*field));
        }

        if self.hold_to_turn_off_ms <= self.press_to_turn_on_ms {
            return Err(ConfigError::HoldNotLongerThanPress);
        }

        Ok(())
    }

    /// Confirmation window for the power button in the given role
    pub fn button_window_ms(&self, window: ButtonWindow) -> u32 {
        match window {
            ButtonWindow::PressToTurnOn => self.press_to_turn_on_ms,
            ButtonWindow::HoldToTurnOff => self.hold_to_turn_off_ms,
        }
    }

    /// Duration for a timer request issued by a transition
    pub fn timer_ms(&self, request: TimerRequest) -> u32 {
        match request {
            TimerRequest::PowerUpTimeout => self.power_up_timeout_ms,
            TimerRequest::ResetHold => self.reset_hold_ms,
            TimerRequest::Settle => self.settle_ms,
        }
    }
}
