use rand::Rng;
use rand::rngs::SmallRng;

/// Randomness consumed by the cure engine.
pub trait CureRng {
    /// True with probability `chance`, clamped to `[0, 1]`. NaN counts as zero.
    fn prob(&mut self, chance: f32) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Shared clamp so every implementation treats edge chances the same way.
/// `Some` means the outcome is decided without drawing a number.
fn settled(chance: f32) -> Option<bool> {
    if chance.is_nan() || chance <= 0.0 {
        Some(false)
    } else if chance >= 1.0 {
        Some(true)
    } else {
        None
    }
}

impl CureRng for SmallRng {
    fn prob(&mut self, chance: f32) -> bool {
        settled(chance).unwrap_or_else(|| self.random::<f32>() < chance)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Deterministic stand-in that answers every roll with the same outcome.
///
/// Records each chance it was asked to sample so tests can assert on the
/// probabilities a rule computed.
#[derive(Debug, Clone, Default)]
pub struct FixedRoll {
    pub outcome: bool,
    pub asked: Vec<f32>,
}

impl FixedRoll {
    pub fn always() -> Self {
        Self {
            outcome: true,
            asked: Vec::new(),
        }
    }

    pub fn never() -> Self {
        Self {
            outcome: false,
            asked: Vec::new(),
        }
    }
}

impl CureRng for FixedRoll {
    fn prob(&mut self, chance: f32) -> bool {
        self.asked.push(chance);
        self.outcome
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
