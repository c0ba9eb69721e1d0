//! Board-agnostic core logic for the ATX power sequencer
//!
//! This crate contains all sequencing logic that does not depend on
//! specific hardware:
//!
//! - Input debouncing with retunable confirmation windows
//! - One-shot interval timer with wraparound-safe arithmetic
//! - The 8-state power/reset state machine, as a pure transition function
//! - The sequencer owning state and timer
//! - Timing configuration and validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod sequencer;
pub mod state;
pub mod timer;

pub use config::{ConfigError, TimingConfig};
pub use debounce::Debouncer;
pub use sequencer::Sequencer;
pub use state::{ButtonWindow, Effects, Fault, Inputs, Outputs, Readings, State, TimerRequest, Transition};
pub use timer::IntervalTimer;
