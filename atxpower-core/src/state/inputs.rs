//! Inputs consumed by the state machine

/// Debounced readings of the three physical inputs
///
/// All levels are logical: `true` means pressed (buttons) or asserted
/// (power-good), regardless of the electrical polarity of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Power button stably pressed
    pub power_button: bool,
    /// Reset button stably pressed
    pub reset_button: bool,
    /// Power-good stably asserted
    pub power_good: bool,
}

/// Everything a transition may depend on in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// Power button stably pressed
    pub power_button: bool,
    /// Reset button stably pressed
    pub reset_button: bool,
    /// Power-good stably asserted
    pub power_good: bool,
    /// Interval timer has elapsed
    pub timer_elapsed: bool,
}

impl Inputs {
    /// Combine debounced readings with the timer state
    pub fn new(readings: Readings, timer_elapsed: bool) -> Self {
        Self {
            power_button: readings.power_button,
            reset_button: readings.reset_button,
            power_good: readings.power_good,
            timer_elapsed,
        }
    }

    /// Every possible input combination
    pub fn all() -> impl Iterator<Item = Inputs> {
        (0u8..16).map(|bits| Inputs {
            power_button: bits & 0b0001 != 0,
            reset_button: bits & 0b0010 != 0,
            power_good: bits & 0b0100 != 0,
            timer_elapsed: bits & 0b1000 != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_combinations_distinct() {
        let combos: [Inputs; 16] = {
            let mut out = [Inputs::default(); 16];
            for (slot, inputs) in out.iter_mut().zip(Inputs::all()) {
                *slot = inputs;
            }
            out
        };

        for (i, a) in combos.iter().enumerate() {
            for b in &combos[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Inputs::all().count(), 16);
    }

    #[test]
    fn test_new_from_readings() {
        let readings = Readings {
            power_button: true,
            reset_button: false,
            power_good: true,
        };
        let inputs = Inputs::new(readings, true);
        assert!(inputs.power_button);
        assert!(!inputs.reset_button);
        assert!(inputs.power_good);
        assert!(inputs.timer_elapsed);
    }
}
