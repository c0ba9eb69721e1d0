//! Power controller board
//!
//! Ties the three debounced inputs, the four output lines, the sequencer
//! and the heartbeat together. [`PowerBoard::poll`] is one iteration of the
//! polling loop:
//!
//! 1. advance the debouncers (power button, reset button, power-good)
//! 2. evaluate the sequencer on the fresh readings
//! 3. perform the output writes the transition asked for
//! 4. advance the status LED heartbeat

use atxpower_core::{Effects, Outputs, Readings, Sequencer, State, TimingConfig, Transition};
use atxpower_hal::{InputPin, OutputPin};

use crate::heartbeat::Heartbeat;
use crate::input::DebouncedInput;
use crate::output::OutputLine;

/// Raw input pins
///
/// All three are active-low with pull-ups.
pub struct BoardInputs<I> {
    /// Power button (low = pressed)
    pub power_button: I,
    /// Reset button (low = pressed)
    pub reset_button: I,
    /// Power-good sense (low = asserted)
    pub power_good: I,
}

/// Output lines, with polarity already chosen by the board setup
pub struct BoardOutputs<O> {
    /// Power supply enable
    pub psu_enable: OutputLine<O>,
    /// Power LED
    pub power_led: OutputLine<O>,
    /// Reset hold (on = computer held in reset)
    pub reset_hold: OutputLine<O>,
    /// Status LED (heartbeat)
    pub status_led: OutputLine<O>,
}

/// Complete power controller
pub struct PowerBoard<I, O> {
    power_button: DebouncedInput<I>,
    reset_button: DebouncedInput<I>,
    power_good: DebouncedInput<I>,
    outputs: BoardOutputs<O>,
    sequencer: Sequencer,
    heartbeat: Heartbeat,
}

impl<I: InputPin, O: OutputPin> PowerBoard<I, O> {
    /// Create the controller and drive the safe startup configuration
    ///
    /// The machine always starts in `Off`: supply disabled, LEDs off,
    /// reset asserted.
    pub fn new(inputs: BoardInputs<I>, outputs: BoardOutputs<O>, timing: TimingConfig, now_ms: u32) -> Self {
        let sequencer = Sequencer::new(timing);
        let press_window = timing.button_window_ms(Sequencer::INITIAL_BUTTON_WINDOW);

        let mut board = Self {
            power_button: DebouncedInput::new_active_low(inputs.power_button, press_window),
            reset_button: DebouncedInput::new_active_low(inputs.reset_button, timing.debounce_ms),
            power_good: DebouncedInput::new_active_low(inputs.power_good, timing.debounce_ms),
            outputs,
            sequencer,
            heartbeat: Heartbeat::new(timing.heartbeat_ms, now_ms),
        };

        board.write_outputs(Outputs::SAFE_OFF);
        board.outputs.status_led.set_on(false);
        board
    }

    /// Run one polling iteration
    ///
    /// Returns the transition taken in this iteration, if any.
    pub fn poll(&mut self, now_ms: u32) -> Option<Transition> {
        self.power_button.advance(now_ms);
        self.reset_button.advance(now_ms);
        self.power_good.advance(now_ms);

        let transition = self.sequencer.update(self.readings(), now_ms);
        if let Some(transition) = &transition {
            self.apply(&transition.effects);
        }

        if let Some(lit) = self.heartbeat.poll(now_ms) {
            self.outputs.status_led.set_on(lit);
        }

        transition
    }

    /// Current debounced readings
    pub fn readings(&self) -> Readings {
        Readings {
            power_button: self.power_button.is_active(),
            reset_button: self.reset_button.is_active(),
            power_good: self.power_good.is_active(),
        }
    }

    /// Get current sequencer state
    pub fn state(&self) -> State {
        self.sequencer.state()
    }

    /// Get the sequencer
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Logical levels currently driven on the sequenced outputs
    pub fn outputs(&self) -> Outputs {
        Outputs {
            psu_enable: self.outputs.psu_enable.is_on(),
            power_led: self.outputs.power_led.is_on(),
            reset_hold: self.outputs.reset_hold.is_on(),
        }
    }

    /// Check if the status LED is lit
    pub fn status_led(&self) -> bool {
        self.outputs.status_led.is_on()
    }

    /// Window currently configured on the power button
    pub fn power_button_window_ms(&self) -> u32 {
        self.power_button.confirm_window_ms()
    }

    fn apply(&mut self, effects: &Effects) {
        if let Some(on) = effects.psu_enable {
            self.outputs.psu_enable.set_on(on);
        }
        if let Some(on) = effects.power_led {
            self.outputs.power_led.set_on(on);
        }
        if let Some(held) = effects.reset_hold {
            self.outputs.reset_hold.set_on(held);
        }
        if let Some(window) = effects.power_button_window {
            self.power_button
                .set_confirm_window(self.sequencer.timing().button_window_ms(window));
        }
    }

    fn write_outputs(&mut self, outputs: Outputs) {
        self.outputs.psu_enable.set_on(outputs.psu_enable);
        self.outputs.power_led.set_on(outputs.power_led);
        self.outputs.reset_hold.set_on(outputs.reset_hold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atxpower_core::Fault;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Mock input pin reading a shared electrical level
    struct MockInput<'a>(&'a Cell<bool>);

    impl InputPin for MockInput<'_> {
        fn is_high(&mut self) -> bool {
            self.0.get()
        }
    }

    /// Mock output pin writing a shared electrical level
    struct MockOutput<'a>(&'a Cell<bool>);

    impl OutputPin for MockOutput<'_> {
        fn set_high(&mut self) {
            self.0.set(true);
        }

        fn set_low(&mut self) {
            self.0.set(false);
        }

        fn is_set_high(&self) -> bool {
            self.0.get()
        }
    }

    /// Electrical levels of every board line
    struct Lines {
        power_button: Cell<bool>,
        reset_button: Cell<bool>,
        power_good: Cell<bool>,
        psu_enable: Cell<bool>,
        power_led: Cell<bool>,
        reset_hold: Cell<bool>,
        status_led: Cell<bool>,
    }

    impl Lines {
        /// Buttons released, supply reporting no power-good
        fn new() -> Self {
            Self {
                power_button: Cell::new(true),
                reset_button: Cell::new(true),
                power_good: Cell::new(true),
                psu_enable: Cell::new(true),
                power_led: Cell::new(true),
                reset_hold: Cell::new(false),
                status_led: Cell::new(true),
            }
        }

        fn board(&self) -> PowerBoard<MockInput<'_>, MockOutput<'_>> {
            let inputs = BoardInputs {
                power_button: MockInput(&self.power_button),
                reset_button: MockInput(&self.reset_button),
                power_good: MockInput(&self.power_good),
            };
            let outputs = BoardOutputs {
                psu_enable: OutputLine::new_active_high(MockOutput(&self.psu_enable), false),
                power_led: OutputLine::new_active_high(MockOutput(&self.power_led), false),
                reset_hold: OutputLine::new_active_high(MockOutput(&self.reset_hold), true),
                status_led: OutputLine::new_active_high(MockOutput(&self.status_led), false),
            };
            PowerBoard::new(inputs, outputs, TimingConfig::default(), 0)
        }

        fn press_power(&self, pressed: bool) {
            self.power_button.set(!pressed);
        }

        fn press_reset(&self, pressed: bool) {
            self.reset_button.set(!pressed);
        }

        fn assert_power_good(&self, asserted: bool) {
            self.power_good.set(!asserted);
        }
    }

    /// Poll once per millisecond over `[from, to)`, collecting transitions
    fn run(board: &mut PowerBoard<MockInput<'_>, MockOutput<'_>>, from: u32, to: u32) -> Vec<Transition> {
        (from..to).filter_map(|t| board.poll(t)).collect()
    }

    fn states(transitions: &[Transition]) -> Vec<State> {
        transitions.iter().map(|t| t.to).collect()
    }

    /// Power on and reach `Normal`; returns the time `Normal` was entered
    fn power_on(lines: &Lines, board: &mut PowerBoard<MockInput<'_>, MockOutput<'_>>) -> u32 {
        lines.press_power(true);
        run(board, 0, 150);
        lines.press_power(false);
        run(board, 150, 300);
        lines.assert_power_good(true);
        run(board, 300, 851);
        assert_eq!(board.state(), State::Normal);
        850
    }

    #[test]
    fn test_startup_drives_safe_outputs() {
        let lines = Lines::new();
        let board = lines.board();

        assert_eq!(board.state(), State::Off);
        assert!(!lines.psu_enable.get());
        assert!(!lines.power_led.get());
        assert!(lines.reset_hold.get());
        assert!(!lines.status_led.get());
        assert_eq!(board.power_button_window_ms(), 100);
    }

    #[test]
    fn test_press_to_power_up() {
        let lines = Lines::new();
        let mut board = lines.board();

        lines.press_power(true);
        assert!(run(&mut board, 0, 100).is_empty());
        assert_eq!(states(&run(&mut board, 100, 150)), [State::WaitOn]);

        // Nothing happens until the button is released
        lines.press_power(false);
        assert!(run(&mut board, 150, 250).is_empty());
        assert_eq!(board.state(), State::WaitOn);
        assert!(!lines.psu_enable.get());

        let transitions = run(&mut board, 250, 251);
        assert_eq!(states(&transitions), [State::PoweringUp]);
        assert!(lines.psu_enable.get());
        assert!(lines.power_led.get());
        assert!(lines.reset_hold.get());
        assert_eq!(board.power_button_window_ms(), 1000);
    }

    #[test]
    fn test_power_good_releases_reset() {
        let lines = Lines::new();
        let mut board = lines.board();

        lines.press_power(true);
        run(&mut board, 0, 150);
        lines.press_power(false);
        run(&mut board, 150, 251);
        assert_eq!(board.state(), State::PoweringUp);

        lines.assert_power_good(true);
        assert!(run(&mut board, 1000, 1050).is_empty());
        assert_eq!(states(&run(&mut board, 1050, 1051)), [State::Reset]);
        assert!(lines.reset_hold.get());

        assert!(run(&mut board, 1051, 1550).is_empty());
        assert_eq!(states(&run(&mut board, 1550, 1551)), [State::Normal]);
        assert!(!lines.reset_hold.get());
        assert!(lines.psu_enable.get());
        assert!(lines.power_led.get());
    }

    #[test]
    fn test_power_good_timeout_shuts_down() {
        let lines = Lines::new();
        let mut board = lines.board();

        lines.press_power(true);
        run(&mut board, 0, 150);
        lines.press_power(false);
        run(&mut board, 150, 251);

        assert!(run(&mut board, 251, 5250).is_empty());
        assert_eq!(board.state(), State::PoweringUp);

        let transitions = run(&mut board, 5250, 5251);
        assert_eq!(states(&transitions), [State::Off]);
        assert_eq!(transitions[0].fault, Some(Fault::PowerGoodTimeout));
        assert!(!lines.psu_enable.get());
        assert!(!lines.power_led.get());
        assert!(lines.reset_hold.get());
        assert_eq!(board.power_button_window_ms(), 100);

        // No retry without a fresh press
        assert!(run(&mut board, 5251, 20_000).is_empty());
    }

    #[test]
    fn test_hold_to_power_off() {
        let lines = Lines::new();
        let mut board = lines.board();
        let now = power_on(&lines, &mut board);

        lines.press_power(true);
        assert!(run(&mut board, now + 100, now + 1099).is_empty());
        assert_eq!(states(&run(&mut board, now + 1099, now + 1101)), [State::WaitOff]);
        assert!(!lines.psu_enable.get());
        assert!(!lines.power_led.get());
        assert!(!lines.reset_hold.get());

        // Supply collapses; WAIT_OFF states do not look at power-good
        lines.assert_power_good(false);
        lines.press_power(false);
        let t = now + 1200;
        assert_eq!(states(&run(&mut board, t, t + 101)), [State::WaitOff2]);

        assert!(run(&mut board, t + 101, t + 600).is_empty());
        assert!(!lines.reset_hold.get());
        assert_eq!(states(&run(&mut board, t + 600, t + 601)), [State::Off]);
        assert!(lines.reset_hold.get());
        assert_eq!(board.outputs(), Outputs::SAFE_OFF);
    }

    #[test]
    fn test_tap_does_not_power_off() {
        let lines = Lines::new();
        let mut board = lines.board();
        let now = power_on(&lines, &mut board);

        lines.press_power(true);
        run(&mut board, now, now + 300);
        lines.press_power(false);
        assert!(run(&mut board, now + 300, now + 3000).is_empty());
        assert_eq!(board.state(), State::Normal);
        assert!(lines.psu_enable.get());
    }

    #[test]
    fn test_reset_button() {
        let lines = Lines::new();
        let mut board = lines.board();
        let now = power_on(&lines, &mut board);

        lines.press_reset(true);
        assert_eq!(states(&run(&mut board, now + 100, now + 200)), [State::WaitReset]);
        assert!(lines.reset_hold.get());

        // Held in reset for as long as the button is down
        run(&mut board, now + 200, now + 2000);
        assert_eq!(board.state(), State::WaitReset);
        assert!(lines.reset_hold.get());

        lines.press_reset(false);
        assert_eq!(states(&run(&mut board, now + 2000, now + 2051)), [State::Reset]);

        // Minimum hold after release
        assert!(run(&mut board, now + 2051, now + 2550).is_empty());
        assert!(lines.reset_hold.get());
        assert_eq!(states(&run(&mut board, now + 2550, now + 2551)), [State::Normal]);
        assert!(!lines.reset_hold.get());
        assert!(lines.psu_enable.get());
    }

    #[test]
    fn test_power_loss_shuts_down() {
        let lines = Lines::new();
        let mut board = lines.board();
        let now = power_on(&lines, &mut board);

        // A power button press shorter than the hold window does not interfere
        lines.press_power(true);
        run(&mut board, now + 100, now + 200);
        lines.assert_power_good(false);

        let transitions = run(&mut board, now + 200, now + 251);
        assert_eq!(states(&transitions), [State::Off]);
        assert_eq!(transitions[0].fault, Some(Fault::PowerLost));
        assert_eq!(board.outputs(), Outputs::SAFE_OFF);
        assert!(lines.reset_hold.get());
        assert!(!lines.psu_enable.get());
    }

    #[test]
    fn test_full_cycle_sequence() {
        let lines = Lines::new();
        let mut board = lines.board();
        let mut seen = Vec::new();

        lines.press_power(true);
        seen.extend(run(&mut board, 0, 150));
        lines.press_power(false);
        seen.extend(run(&mut board, 150, 300));
        lines.assert_power_good(true);
        seen.extend(run(&mut board, 300, 1000));
        lines.press_power(true);
        seen.extend(run(&mut board, 1000, 2100));
        lines.press_power(false);
        lines.assert_power_good(false);
        seen.extend(run(&mut board, 2100, 3000));

        assert_eq!(
            states(&seen),
            [
                State::WaitOn,
                State::PoweringUp,
                State::Reset,
                State::Normal,
                State::WaitOff,
                State::WaitOff2,
                State::Off,
            ]
        );
        assert!(seen.iter().all(|t| t.fault.is_none()));
    }

    #[test]
    fn test_status_led_heartbeat() {
        let lines = Lines::new();
        let mut board = lines.board();

        run(&mut board, 0, 500);
        assert!(!board.status_led());
        run(&mut board, 500, 501);
        assert!(lines.status_led.get());
        run(&mut board, 501, 1001);
        assert!(!lines.status_led.get());
        assert_eq!(board.state(), State::Off);
    }

    proptest! {
        #[test]
        fn prop_short_taps_never_power_on(
            pulses in proptest::collection::vec((1u32..100, 1u32..100), 1..30),
        ) {
            let lines = Lines::new();
            let mut board = lines.board();
            let mut t = 0;

            for (press_ms, gap_ms) in pulses {
                lines.press_power(true);
                prop_assert!(run(&mut board, t, t + press_ms).is_empty());
                t += press_ms;
                lines.press_power(false);
                prop_assert!(run(&mut board, t, t + gap_ms).is_empty());
                t += gap_ms;
            }
            prop_assert_eq!(board.state(), State::Off);
            prop_assert!(!lines.psu_enable.get());
        }
    }
}
