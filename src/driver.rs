//! Fixed-timestep accumulator loop
//!
//! The simulation never reads a clock. Callers feed real elapsed time into
//! the driver, which converts it into zero or more fixed ticks and clears
//! one-shot commands once they have been consumed.

use rand::Rng;

use crate::consts::{MAX_SUBSTEPS, TICK_DT};
use crate::sim::{MatchState, TickInput, tick};

/// Converts wall-clock frame times into fixed simulation ticks
#[derive(Debug, Default)]
pub struct FixedStepDriver {
    accumulator: f32,
    input: TickInput,
}

impl FixedStepDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input state; held flags persist until the caller clears them
    pub fn input_mut(&mut self) -> &mut TickInput {
        &mut self.input
    }

    /// Advance the match by `elapsed` seconds of real time
    ///
    /// Runs at most `MAX_SUBSTEPS` ticks so a long frame cannot stall the
    /// caller. One-shot commands (`start`, `restart`) are cleared after the
    /// first tick that consumed them. Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut MatchState, elapsed: f32, rng: &mut impl Rng) -> u32 {
        // Clamp pathological frame gaps (tab switch, debugger pause)
        self.accumulator += elapsed.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            tick(state, &input, rng);
            self.accumulator -= TICK_DT;
            substeps += 1;

            self.input.start = false;
            self.input.restart = false;
        }
        substeps
    }
}
