//! Build script for atxpower-firmware
//!
//! - Sets up linker search paths and scripts for the RP2040
//! - Validates timing.toml and bakes it into the firmware image

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use atxpower_core::config::TimingConfig;

fn main() {
    setup_linker();
    generate_timing();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timing.toml and emit it as a Rust constant
fn generate_timing() {
    // Re-run if timing.toml changes
    println!("cargo:rerun-if-changed=timing.toml");

    let config_path = Path::new("timing.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timing.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timing.toml configuration file.         ║\n\
            ║  Please create one in the atxpower-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timing.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and field types in one go
    let timing: TimingConfig = match toml::from_str(&config_content) {
        Ok(timing) => timing,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid timing.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = timing.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timing in timing.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("timing.rs")).unwrap();
    write!(
        f,
        "/// Timing constants from timing.toml, validated at build time\n\
         pub const TIMING: TimingConfig = TimingConfig {{\n    \
             press_to_turn_on_ms: {},\n    \
             hold_to_turn_off_ms: {},\n    \
             reset_hold_ms: {},\n    \
             power_up_timeout_ms: {},\n    \
             settle_ms: {},\n    \
             debounce_ms: {},\n    \
             heartbeat_ms: {},\n    \
             poll_interval_ms: {},\n\
         }};\n",
        timing.press_to_turn_on_ms,
        timing.hold_to_turn_off_ms,
        timing.reset_hold_ms,
        timing.power_up_timeout_ms,
        timing.settle_ms,
        timing.debounce_ms,
        timing.heartbeat_ms,
        timing.poll_interval_ms,
    )
    .unwrap();

    println!("cargo:warning=timing.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
