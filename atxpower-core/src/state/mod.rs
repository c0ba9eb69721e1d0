//! Power/reset state machine
//!
//! Defines the authoritative runtime behavior of the sequencer.
//! The state machine is explicit, finite, and deterministic; transitions
//! are a pure function of the current state and the sampled inputs.

pub mod effects;
pub mod inputs;
pub mod machine;

pub use effects::{ButtonWindow, Effects, Fault, Outputs, TimerRequest};
pub use inputs::{Inputs, Readings};
pub use machine::{State, Transition};
