use std::fmt;

use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Monotonic simulation time as total elapsed milliseconds since the run began.
///
/// Not wall-clock time: it only moves when the tick schedule advances the clock.
/// Natural `u64` ordering equals chronological ordering.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SimTime(u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(secs * MILLIS_PER_SECOND)
    }

    /// Fractional seconds, rounded to the nearest millisecond. Negative and NaN clamp to zero.
    pub fn from_secs_f32(secs: f32) -> Self {
        Self(secs_to_millis(secs))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_secs_f32(self) -> f32 {
        self.0 as f32 / MILLIS_PER_SECOND as f32
    }

    /// This time shifted forward by `secs` seconds (saturating; non-positive is a no-op).
    pub fn after_secs(self, secs: f32) -> Self {
        Self(self.0.saturating_add(secs_to_millis(secs)))
    }
}

fn secs_to_millis(secs: f32) -> u64 {
    if secs.is_nan() || secs <= 0.0 {
        return 0;
    }
    (secs as f64 * MILLIS_PER_SECOND as f64).round() as u64
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:03}s",
            self.0 / MILLIS_PER_SECOND,
            self.0 % MILLIS_PER_SECOND
        )
    }
}
