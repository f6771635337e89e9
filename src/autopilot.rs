//! Seeded demo autopilot
//!
//! Produces a reproducible stream of held-action sets for headless runs:
//! every few ticks it rolls a new combination of direction, jump and attack.
//! Same seed, same inputs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Action, InputState};

/// Shortest and longest time a rolled input is held (ticks)
const MIN_HOLD_TICKS: u32 = 10;
const MAX_HOLD_TICKS: u32 = 45;

pub struct Autopilot {
    rng: Pcg32,
    current: InputState,
    hold_ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: InputState::new(),
            hold_ticks: 0,
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self) -> InputState {
        if self.hold_ticks == 0 {
            self.current = self.roll();
            self.hold_ticks = self.rng.random_range(MIN_HOLD_TICKS..=MAX_HOLD_TICKS);
        }
        self.hold_ticks -= 1;
        self.current
    }

    fn roll(&mut self) -> InputState {
        let mut input = InputState::new();
        // Mostly push right, the way the levels are laid out
        match self.rng.random_range(0..10) {
            0..=5 => input.press(Action::Right),
            6..=7 => input.press(Action::Left),
            _ => {}
        }
        if self.rng.random_bool(0.4) {
            input.press(Action::Jump);
        }
        if self.rng.random_bool(0.5) {
            input.press(Action::Attack);
        }
        input
    }
}
