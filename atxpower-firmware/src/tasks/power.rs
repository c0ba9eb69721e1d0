//! Power sequencing task
//!
//! Runs the polling loop: every tick the board samples its inputs, the
//! sequencer evaluates once and the requested output writes are performed.

use defmt::*;
use embassy_time::{Duration, Ticker};

use atxpower_core::Fault;
use atxpower_hal::Clock;

use crate::board::FirmwareBoard;
use crate::clock::EmbassyClock;
use crate::timing::TIMING;

/// Power sequencing task
///
/// Never returns. Misses no edges as long as the poll interval stays well
/// below the debounce window.
#[embassy_executor::task]
pub async fn power_task(mut board: FirmwareBoard, clock: EmbassyClock) {
    info!("Power task started (poll every {}ms)", TIMING.poll_interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(TIMING.poll_interval_ms as u64));
    let mut last_readings = board.readings();

    loop {
        let now_ms = clock.now_ms();

        if let Some(transition) = board.poll(now_ms) {
            info!("{} -> {}", transition.from, transition.to);

            match transition.fault {
                Some(Fault::PowerGoodTimeout) => {
                    warn!("Power-good not seen within {}ms, supply shut down", TIMING.power_up_timeout_ms);
                }
                Some(Fault::PowerLost) => {
                    warn!("Power-good lost while running");
                }
                None => {}
            }
        }

        let readings = board.readings();
        if readings != last_readings {
            debug!("Inputs: {}", readings);
            last_readings = readings;
        }

        ticker.next().await;
    }
}
