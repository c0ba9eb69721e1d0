//! RP2040 board wiring
//!
//! Pin assignments:
//! - GPIO2: power button (to ground, pull-up)
//! - GPIO3: reset button (to ground, pull-up)
//! - GPIO4: power-good (open collector, pull-up, low = good)
//! - GPIO14: reset hold (high = computer held in reset)
//! - GPIO15: PSU enable (drives PS_ON# through an inverting transistor)
//! - GPIO16: power LED
//! - GPIO25: status LED (onboard)

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

use atxpower_core::TimingConfig;
use atxpower_drivers::{BoardInputs, BoardOutputs, OutputLine, PowerBoard};
use atxpower_hal::{EhInput, EhOutput};

/// Input pin type used on this board
pub type BoardInput = EhInput<Input<'static>>;

/// Output pin type used on this board
pub type BoardOutput = EhOutput<Output<'static>>;

/// The power controller as wired on this board
pub type FirmwareBoard = PowerBoard<BoardInput, BoardOutput>;

/// Claim the pins and build the controller
///
/// Every output comes up at its safe level: supply off, LEDs off and
/// reset asserted from the first instruction the pin is driven.
pub fn init(p: Peripherals, timing: TimingConfig, now_ms: u32) -> FirmwareBoard {
    let inputs = BoardInputs {
        power_button: EhInput::new(Input::new(p.PIN_2, Pull::Up)),
        reset_button: EhInput::new(Input::new(p.PIN_3, Pull::Up)),
        power_good: EhInput::new(Input::new(p.PIN_4, Pull::Up)),
    };

    let outputs = BoardOutputs {
        psu_enable: OutputLine::new_active_high(
            EhOutput::new(Output::new(p.PIN_15, Level::Low), false),
            false,
        ),
        power_led: OutputLine::new_active_high(
            EhOutput::new(Output::new(p.PIN_16, Level::Low), false),
            false,
        ),
        reset_hold: OutputLine::new_active_high(
            EhOutput::new(Output::new(p.PIN_14, Level::High), true),
            true,
        ),
        status_led: OutputLine::new_active_high(
            EhOutput::new(Output::new(p.PIN_25, Level::Low), false),
            false,
        ),
    };

    PowerBoard::new(inputs, outputs, timing, now_ms)
}
