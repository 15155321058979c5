use serde::{Deserialize, Serialize};

use crate::cure::rng::CureRng;
use crate::cure::state::CureTicker;

use super::{number, percent};

fn default_wait_chance() -> f32 {
    1.0
}

/// Recovery that can only happen once the disease has run for a while.
///
/// After `required_ticks` evaluations a `wait_chance` roll decides the outcome.
/// The counter restarts either way, so a failed roll must wait out the full
/// period again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitStep {
    pub required_ticks: u32,
    #[serde(default = "default_wait_chance")]
    pub wait_chance: f32,
}

impl WaitStep {
    pub(super) fn evaluate(&self, ticker: &mut CureTicker, rng: &mut dyn CureRng) -> bool {
        if self.required_ticks == 0 {
            return false;
        }
        ticker.ticks = ticker.ticks.saturating_add(1);
        if ticker.ticks < self.required_ticks {
            return false;
        }
        ticker.ticks = 0;
        rng.prob(self.wait_chance)
    }

    pub(super) fn describe(&self, cycle_seconds: f32) -> Vec<String> {
        if self.required_ticks == 0 {
            return vec!["Does not clear up on its own.".to_string()];
        }
        let seconds = self.required_ticks as f32 * cycle_seconds;
        vec![format!(
            "{} chance to clear up on its own after about {} seconds.",
            percent(self.wait_chance.clamp(0.0, 1.0)),
            number(seconds)
        )]
    }
}
