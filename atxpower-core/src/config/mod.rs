//! Configuration types
//!
//! The sequencer has no runtime configuration surface. Timing constants are
//! fixed at build time (see `atxpower-firmware/timing.toml`) and validated
//! before they reach the firmware image.

pub mod timing;

pub use timing::{ConfigError, Field, TimingConfig};
