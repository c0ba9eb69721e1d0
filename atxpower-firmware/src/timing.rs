//! Timing configuration baked in at build time
//!
//! Edit `timing.toml` and rebuild to customize. `build.rs` rejects invalid
//! values before anything is flashed.

use atxpower_core::TimingConfig;

include!(concat!(env!("OUT_DIR"), "/timing.rs"));
