//! Data-configured cure conditions.
//!
//! A [`CureStep`] pairs a sampling chance and a demotion flag with one of the
//! built-in condition kinds. Conditions only read carrier data and their own
//! ticker; applying a cure is the dispatcher's job.

mod bedrest;
mod reagent;
mod temperature;
mod wait;

use serde::{Deserialize, Serialize};

use crate::cure::rng::CureRng;
use crate::cure::state::CureTicker;
use crate::ecs::components::{ChemicalStore, RestState};
use crate::model::DiseaseCatalog;

pub use bedrest::BedrestStep;
pub use reagent::{ReagentRequirement, ReagentStep};
pub use temperature::TemperatureStep;
pub use wait::WaitStep;

fn default_cure_chance() -> f32 {
    1.0
}

/// Carrier data a cure condition may look at. Missing pieces fail the condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarrierVitals<'a> {
    pub temperature: Option<f32>,
    pub chemicals: Option<&'a ChemicalStore>,
    pub rest: Option<RestState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CureStep {
    /// Probability that the step is sampled at all on a given cycle.
    #[serde(default = "default_cure_chance")]
    pub cure_chance: f32,
    /// Demote by one stage instead of curing. Ignored on symptom steps.
    #[serde(default)]
    pub lower_stage: bool,
    #[serde(flatten)]
    pub kind: CureStepKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CureStepKind {
    Wait(WaitStep),
    Temperature(TemperatureStep),
    Reagent(ReagentStep),
    Bedrest(BedrestStep),
}

impl CureStep {
    pub fn new(kind: CureStepKind) -> Self {
        Self {
            cure_chance: 1.0,
            lower_stage: false,
            kind,
        }
    }

    pub fn wait(required_ticks: u32, wait_chance: f32) -> Self {
        Self::new(CureStepKind::Wait(WaitStep {
            required_ticks,
            wait_chance,
        }))
    }

    pub fn temperature(max_temperature: f32, required_ticks: u32) -> Self {
        Self::new(CureStepKind::Temperature(TemperatureStep {
            max_temperature,
            required_ticks,
        }))
    }

    pub fn reagent(requirements: Vec<ReagentRequirement>) -> Self {
        Self::new(CureStepKind::Reagent(ReagentStep { requirements }))
    }

    pub fn bedrest(bedrest_chance: f32, sleep_multiplier: f32) -> Self {
        Self::new(CureStepKind::Bedrest(BedrestStep {
            bedrest_chance,
            sleep_multiplier,
        }))
    }

    pub fn with_cure_chance(mut self, chance: f32) -> Self {
        self.cure_chance = chance;
        self
    }

    pub fn lowering_stage(mut self) -> Self {
        self.lower_stage = true;
        self
    }

    /// Sampling chance clamped to `[0, 1]`.
    pub fn chance(&self) -> f32 {
        if self.cure_chance.is_nan() {
            0.0
        } else {
            self.cure_chance.clamp(0.0, 1.0)
        }
    }

    /// Whether the step keeps a ticker between evaluations.
    pub fn is_stateful(&self) -> bool {
        matches!(
            self.kind,
            CureStepKind::Wait(_) | CureStepKind::Temperature(_)
        )
    }

    /// Check the condition for one carrier right now.
    pub fn evaluate(
        &self,
        vitals: &CarrierVitals<'_>,
        ticker: &mut CureTicker,
        rng: &mut dyn CureRng,
    ) -> bool {
        match &self.kind {
            CureStepKind::Wait(step) => step.evaluate(ticker, rng),
            CureStepKind::Temperature(step) => step.evaluate(vitals.temperature, ticker),
            CureStepKind::Reagent(step) => step.evaluate(vitals.chemicals),
            CureStepKind::Bedrest(step) => step.evaluate(vitals.rest, rng),
        }
    }

    /// Human-readable description for inspection tools.
    ///
    /// `cycle_seconds` converts tick counts into approximate durations.
    pub fn describe(&self, catalog: &DiseaseCatalog, cycle_seconds: f32) -> Vec<String> {
        let mut lines = match &self.kind {
            CureStepKind::Wait(step) => step.describe(cycle_seconds),
            CureStepKind::Temperature(step) => step.describe(cycle_seconds),
            CureStepKind::Reagent(step) => step.describe(catalog),
            CureStepKind::Bedrest(step) => step.describe(cycle_seconds),
        };
        let chance = self.chance();
        if chance < 1.0
            && let Some(first) = lines.first_mut()
        {
            *first = format!("{} chance per check: {first}", percent(chance));
        }
        if self.lower_stage {
            lines.push("Only lowers the disease by one stage.".to_string());
        }
        lines
    }
}

/// `0.25` → `"25%"`, `0.005` → `"0.5%"`.
pub(crate) fn percent(chance: f32) -> String {
    format!("{}%", number(chance * 100.0))
}

/// Whole numbers without decimals, everything else with one.
pub(crate) fn number(value: f32) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cure::rng::FixedRoll;

    #[test]
    fn chance_is_clamped() {
        assert_eq!(CureStep::wait(1, 1.0).with_cure_chance(2.0).chance(), 1.0);
        assert_eq!(CureStep::wait(1, 1.0).with_cure_chance(-0.5).chance(), 0.0);
        assert_eq!(CureStep::wait(1, 1.0).with_cure_chance(f32::NAN).chance(), 0.0);
        assert_eq!(CureStep::wait(1, 1.0).with_cure_chance(0.3).chance(), 0.3);
    }

    #[test]
    fn only_time_based_steps_are_stateful() {
        assert!(CureStep::wait(1, 1.0).is_stateful());
        assert!(CureStep::temperature(300.0, 1).is_stateful());
        assert!(!CureStep::reagent(Vec::new()).is_stateful());
        assert!(!CureStep::bedrest(0.1, 3.0).is_stateful());
    }

    #[test]
    fn flat_tagged_json() {
        let json = r#"{ "type": "bedrest", "cure_chance": 0.5, "lower_stage": true,
            "bedrest_chance": 0.2, "sleep_multiplier": 2 }"#;
        let step: CureStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.cure_chance, 0.5);
        assert!(step.lower_stage);
        assert_eq!(
            step.kind,
            CureStepKind::Bedrest(BedrestStep {
                bedrest_chance: 0.2,
                sleep_multiplier: 2.0,
            })
        );

        let value = serde_json::to_value(CureStep::wait(3, 0.5)).unwrap();
        assert_eq!(value["type"], "wait");
        assert_eq!(value["required_ticks"], 3);
    }

    #[test]
    fn defaults_when_omitted() {
        let step: CureStep =
            serde_json::from_str(r#"{ "type": "reagent", "requirements": [] }"#).unwrap();
        assert_eq!(step.cure_chance, 1.0);
        assert!(!step.lower_stage);
    }

    #[test]
    fn evaluate_dispatches_on_kind() {
        let chems = ChemicalStore::new().with("spaceacillin", 10.0);
        let vitals = CarrierVitals {
            temperature: Some(300.0),
            chemicals: Some(&chems),
            rest: None,
        };
        let mut rng = FixedRoll::always();
        let mut ticker = CureTicker::default();

        let reagent = CureStep::reagent(vec![ReagentRequirement::new("spaceacillin", 5.0)]);
        assert!(reagent.evaluate(&vitals, &mut ticker, &mut rng));

        let bedrest = CureStep::bedrest(1.0, 1.0);
        assert!(!bedrest.evaluate(&vitals, &mut ticker, &mut rng));

        let temperature = CureStep::temperature(310.0, 1);
        assert!(temperature.evaluate(&vitals, &mut ticker, &mut rng));
    }

    #[test]
    fn describe_adds_qualifiers() {
        let catalog = DiseaseCatalog::new();
        let lines = CureStep::wait(60, 1.0)
            .with_cure_chance(0.25)
            .lowering_stage()
            .describe(&catalog, 1.0);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("25% chance per check: "), "{lines:?}");
        assert_eq!(lines[1], "Only lowers the disease by one stage.");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(number(30.0), "30");
        assert_eq!(number(2.5), "2.5");
        assert_eq!(percent(0.005), "0.5%");
        assert_eq!(percent(1.0), "100%");
    }
}
