//! atxpower Hardware Abstraction Layer
//!
//! This crate defines the platform services the sequencer core calls:
//! reading a logic level, writing a logic level and reading an elapsed-time
//! clock. Chip support is provided by adapting `embedded-hal` 1.0 pins, so
//! any HAL that implements those traits (embassy-rp, rp2040-hal, ...) can
//! drive the sequencer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  atxpower-firmware (RP2040 binary)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  atxpower-drivers (PowerBoard, lines)   │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ atxpower-hal    │   │ atxpower-core   │
//! │ (this crate)    │   │ (sequencer)     │
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::Clock`] - Monotonic millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod embedded;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use embedded::{EhInput, EhOutput};
pub use gpio::{InputPin, OutputPin};
