use std::collections::BTreeMap;

use bevy_ecs::component::Component;

use crate::model::ReagentId;

/// Core body temperature in Kelvin.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodyTemperature(pub f32);

/// Reagents currently dissolved in an actor.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ChemicalStore {
    pub reagents: BTreeMap<ReagentId, f32>,
}

impl ChemicalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reagent: impl Into<ReagentId>, quantity: f32) -> Self {
        self.reagents.insert(reagent.into(), quantity);
        self
    }

    pub fn quantity(&self, reagent: &ReagentId) -> f32 {
        self.reagents.get(reagent).copied().unwrap_or(0.0)
    }
}

/// Posture and consciousness, as far as bedrest cares.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestState {
    /// Strapped onto a bed or similar surface that promotes healing.
    pub on_healing_bed: bool,
    /// Down for any other reason: knocked out, critical, restrained.
    pub incapacitated: bool,
    pub asleep: bool,
}

impl RestState {
    pub fn is_resting(&self) -> bool {
        self.on_healing_bed || self.incapacitated
    }
}

/// Marker for carriers that have died. Their diseases fade instead of being cured.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Deceased;

/// Metabolic speed relative to normal. Above 1 slows cure checks, below 1 hastens them.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MetabolicRate {
    multiplier: f32,
    /// Cycles banked toward the next evaluation.
    pending: f32,
}

impl MetabolicRate {
    const MIN_MULTIPLIER: f32 = 0.1;

    pub fn new(multiplier: f32) -> Self {
        Self {
            multiplier: Self::sanitize(multiplier),
            pending: 0.0,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Change the multiplier. Banked progress is clamped to the new interval.
    pub fn set_multiplier(&mut self, multiplier: f32) {
        self.multiplier = Self::sanitize(multiplier);
        self.pending = self.pending.min(self.multiplier);
    }

    /// Bank one cycle and return how many evaluations are due now.
    pub fn due(&mut self) -> u32 {
        self.pending += 1.0;
        let mut runs = 0;
        while self.pending >= self.multiplier {
            self.pending -= self.multiplier;
            runs += 1;
        }
        runs
    }

    fn sanitize(multiplier: f32) -> f32 {
        if multiplier.is_nan() || multiplier <= 0.0 {
            1.0
        } else {
            multiplier.max(Self::MIN_MULTIPLIER)
        }
    }
}

impl Default for MetabolicRate {
    fn default() -> Self {
        Self::new(1.0)
    }
}
