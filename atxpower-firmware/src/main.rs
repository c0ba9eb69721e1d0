//! atxpower - ATX Power Sequencer Firmware
//!
//! Main firmware binary for RP2040-based power controller boards.
//! Drives the supply enable, reset line and power LED of an ATX computer
//! from a power button, a reset button and the supply's power-good signal.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use atxpower_hal::Clock;

use crate::clock::EmbassyClock;
use crate::timing::TIMING;

mod board;
mod clock;
mod tasks;
mod timing;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("atxpower firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Timing: press={}ms hold={}ms reset={}ms timeout={}ms settle={}ms debounce={}ms",
        TIMING.press_to_turn_on_ms,
        TIMING.hold_to_turn_off_ms,
        TIMING.reset_hold_ms,
        TIMING.power_up_timeout_ms,
        TIMING.settle_ms,
        TIMING.debounce_ms
    );

    // Outputs are driven to the safe state (supply off, reset held) here,
    // before the executor runs anything else
    let clock = EmbassyClock;
    let board = board::init(p, TIMING, clock.now_ms());
    info!("Board initialized in {}", board.state());

    spawner.spawn(tasks::power_task(board, clock)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
