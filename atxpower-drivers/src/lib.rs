//! Hardware driver implementations
//!
//! This crate binds the board-agnostic sequencer in `atxpower-core` to the
//! pin traits of `atxpower-hal`:
//!
//! - Debounced active-low inputs (buttons, power-good sense)
//! - Polarity-aware output lines (supply enable, reset, LEDs)
//! - Status LED heartbeat
//! - [`PowerBoard`], one polling iteration of the whole controller

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod heartbeat;
pub mod input;
pub mod output;

pub use board::{BoardInputs, BoardOutputs, PowerBoard};
pub use heartbeat::Heartbeat;
pub use input::DebouncedInput;
pub use output::OutputLine;
