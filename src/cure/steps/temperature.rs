use serde::{Deserialize, Serialize};

use crate::cure::state::CureTicker;

use super::number;

/// Sustained low body temperature.
///
/// Needs `required_ticks` consecutive readings at or below `max_temperature`.
/// Any reading above it, or no reading at all, throws away the progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStep {
    pub max_temperature: f32,
    pub required_ticks: u32,
}

impl TemperatureStep {
    pub(super) fn evaluate(&self, temperature: Option<f32>, ticker: &mut CureTicker) -> bool {
        if self.required_ticks == 0 {
            return false;
        }
        let in_range = temperature.is_some_and(|t| t <= self.max_temperature);
        if !in_range {
            ticker.ticks = 0;
            return false;
        }
        ticker.ticks = ticker.ticks.saturating_add(1);
        if ticker.ticks < self.required_ticks {
            return false;
        }
        ticker.ticks = 0;
        true
    }

    pub(super) fn describe(&self, cycle_seconds: f32) -> Vec<String> {
        if self.required_ticks == 0 {
            return vec!["Body temperature has no effect.".to_string()];
        }
        vec![format!(
            "Keep body temperature at or below {} K for about {} seconds.",
            number(self.max_temperature),
            number(self.required_ticks as f32 * cycle_seconds)
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOL: Option<f32> = Some(300.0);
    const HOT: Option<f32> = Some(315.0);

    fn step(required_ticks: u32) -> TemperatureStep {
        TemperatureStep {
            max_temperature: 310.0,
            required_ticks,
        }
    }

    #[test]
    fn fires_after_consecutive_cool_readings() {
        let temp = step(3);
        let mut ticker = CureTicker::default();
        assert!(!temp.evaluate(COOL, &mut ticker));
        assert!(!temp.evaluate(COOL, &mut ticker));
        assert!(temp.evaluate(COOL, &mut ticker));
    }

    #[test]
    fn threshold_is_inclusive() {
        let temp = step(1);
        let mut ticker = CureTicker::default();
        assert!(temp.evaluate(Some(310.0), &mut ticker));
    }

    #[test]
    fn breach_resets_progress() {
        let n = 5;
        let temp = step(n);
        let mut ticker = CureTicker::default();
        for _ in 0..n - 1 {
            assert!(!temp.evaluate(COOL, &mut ticker));
        }
        assert!(!temp.evaluate(HOT, &mut ticker));
        assert_eq!(ticker.ticks, 0);
        for _ in 0..n - 1 {
            assert!(!temp.evaluate(COOL, &mut ticker));
        }
        assert!(temp.evaluate(COOL, &mut ticker));
    }

    #[test]
    fn missing_reading_counts_as_breach() {
        let temp = step(2);
        let mut ticker = CureTicker::default();
        assert!(!temp.evaluate(COOL, &mut ticker));
        assert!(!temp.evaluate(None, &mut ticker));
        assert!(!temp.evaluate(COOL, &mut ticker));
        assert!(temp.evaluate(COOL, &mut ticker));
    }

    #[test]
    fn zero_ticks_never_fires() {
        let temp = step(0);
        let mut ticker = CureTicker::default();
        assert!((0..10).all(|_| !temp.evaluate(COOL, &mut ticker)));
    }

    #[test]
    fn describes_limit_and_duration() {
        assert_eq!(
            step(30).describe(1.0),
            vec!["Keep body temperature at or below 310 K for about 30 seconds.".to_string()]
        );
    }
}
