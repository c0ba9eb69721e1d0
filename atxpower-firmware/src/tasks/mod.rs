//! Embassy async tasks

pub mod power;

pub use power::power_task;
