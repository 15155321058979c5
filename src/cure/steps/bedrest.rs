use serde::{Deserialize, Serialize};

use crate::cure::rng::CureRng;
use crate::ecs::components::RestState;

use super::{number, percent};

fn default_bedrest_chance() -> f32 {
    0.05
}

fn default_sleep_multiplier() -> f32 {
    3.0
}

/// Chance to recover each check while lying down, better while asleep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrestStep {
    #[serde(default = "default_bedrest_chance")]
    pub bedrest_chance: f32,
    /// Applied while asleep. Values below 1 are treated as 1.
    #[serde(default = "default_sleep_multiplier")]
    pub sleep_multiplier: f32,
}

impl BedrestStep {
    /// Per-check probability for the given rest state, before clamping.
    pub fn effective_chance(&self, rest: &RestState) -> f32 {
        if rest.asleep {
            self.bedrest_chance * self.sleep_multiplier.max(1.0)
        } else {
            self.bedrest_chance
        }
    }

    pub(super) fn evaluate(&self, rest: Option<RestState>, rng: &mut dyn CureRng) -> bool {
        let Some(rest) = rest.filter(RestState::is_resting) else {
            return false;
        };
        rng.prob(self.effective_chance(&rest))
    }

    pub(super) fn describe(&self, cycle_seconds: f32) -> Vec<String> {
        let mut line = format!(
            "{} chance every {}s while resting",
            percent(self.bedrest_chance.clamp(0.0, 1.0)),
            number(cycle_seconds)
        );
        let multiplier = self.sleep_multiplier.max(1.0);
        if multiplier > 1.0 {
            let boost = if multiplier == 2.0 {
                "doubled".to_string()
            } else if multiplier == 3.0 {
                "tripled".to_string()
            } else {
                format!("{}x", number(multiplier))
            };
            line.push_str(&format!(", {boost} while asleep"));
        }
        line.push('.');
        vec![line]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cure::rng::FixedRoll;

    fn step() -> BedrestStep {
        BedrestStep {
            bedrest_chance: 0.1,
            sleep_multiplier: 3.0,
        }
    }

    #[test]
    fn requires_rest() {
        let mut rng = FixedRoll::always();
        assert!(!step().evaluate(None, &mut rng));
        assert!(!step().evaluate(Some(RestState::default()), &mut rng));
        let asleep_on_feet = RestState {
            asleep: true,
            ..RestState::default()
        };
        assert!(!step().evaluate(Some(asleep_on_feet), &mut rng));
        assert!(rng.asked.is_empty());
    }

    #[test]
    fn bed_or_incapacitated_both_count() {
        for rest in [
            RestState {
                on_healing_bed: true,
                ..RestState::default()
            },
            RestState {
                incapacitated: true,
                ..RestState::default()
            },
        ] {
            let mut rng = FixedRoll::always();
            assert!(step().evaluate(Some(rest), &mut rng));
            assert_eq!(rng.asked.len(), 1);
        }
    }

    #[test]
    fn sleep_multiplies_the_roll() {
        let rest = RestState {
            on_healing_bed: true,
            asleep: true,
            ..RestState::default()
        };
        let mut rng = FixedRoll::never();
        assert!(!step().evaluate(Some(rest), &mut rng));
        assert!((rng.asked[0] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn multiplier_floor_is_one() {
        let weak = BedrestStep {
            bedrest_chance: 0.2,
            sleep_multiplier: 0.25,
        };
        let rest = RestState {
            incapacitated: true,
            asleep: true,
            ..RestState::default()
        };
        assert_eq!(weak.effective_chance(&rest), 0.2);
    }

    #[test]
    fn describes_sleep_bonus() {
        assert_eq!(
            step().describe(1.0),
            vec!["10% chance every 1s while resting, tripled while asleep.".to_string()]
        );
        let plain = BedrestStep {
            bedrest_chance: 0.05,
            sleep_multiplier: 1.0,
        };
        assert_eq!(
            plain.describe(2.0),
            vec!["5% chance every 2s while resting.".to_string()]
        );
    }
}
