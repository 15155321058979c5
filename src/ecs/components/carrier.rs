use std::collections::{BTreeMap, BTreeSet};

use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

use crate::ecs::time::SimTime;
use crate::model::{DiseaseId, SymptomId};

/// Disease bookkeeping attached to every actor that can host diseases.
///
/// Serializable so it can travel with save data; the cure engine's runtime
/// counters are kept elsewhere and are not part of this component.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseCarrier {
    /// Current stage number per active disease.
    pub active: BTreeMap<DiseaseId, u32>,
    /// Symptoms held inactive until the given time.
    pub suppressed: BTreeMap<SymptomId, SimTime>,
    /// Post-cure resistance per disease. Never decreases.
    pub immunity: BTreeMap<DiseaseId, f32>,
    /// Diseases this carrier is born fully immune to. Applied once on spawn.
    #[serde(default)]
    pub natural_immunities: BTreeSet<DiseaseId>,
}

impl DiseaseCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_natural_immunity(mut self, disease: impl Into<DiseaseId>) -> Self {
        self.natural_immunities.insert(disease.into());
        self
    }

    /// Record `disease` at `stage`. Used by the infection path and by tests.
    pub fn infect(&mut self, disease: impl Into<DiseaseId>, stage: u32) {
        self.active.insert(disease.into(), stage.max(1));
    }

    pub fn stage_of(&self, disease: &DiseaseId) -> Option<u32> {
        self.active.get(disease).copied()
    }

    pub fn has_disease(&self, disease: &DiseaseId) -> bool {
        self.active.contains_key(disease)
    }

    /// Remove `disease`, returning the stage it was at.
    pub fn remove(&mut self, disease: &DiseaseId) -> Option<u32> {
        self.active.remove(disease)
    }

    /// Lower `disease` by one stage, never below 1. Returns `(from, to)` when it moved.
    pub fn demote(&mut self, disease: &DiseaseId) -> Option<(u32, u32)> {
        let stage = self.active.get_mut(disease)?;
        let from = *stage;
        let to = from.saturating_sub(1).max(1);
        if to == from {
            return None;
        }
        *stage = to;
        Some((from, to))
    }

    pub fn is_suppressed(&self, symptom: &SymptomId, now: SimTime) -> bool {
        self.suppressed.get(symptom).is_some_and(|until| now < *until)
    }

    pub fn suppress(&mut self, symptom: SymptomId, until: SimTime) {
        self.suppressed.insert(symptom, until);
    }

    pub fn immunity(&self, disease: &DiseaseId) -> f32 {
        self.immunity.get(disease).copied().unwrap_or(0.0)
    }

    /// Raise immunity to at least `strength`. Lower values are ignored.
    pub fn raise_immunity(&mut self, disease: DiseaseId, strength: f32) {
        let entry = self.immunity.entry(disease).or_insert(0.0);
        if strength > *entry {
            *entry = strength;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demote_stops_at_stage_one() {
        let mut carrier = DiseaseCarrier::new();
        carrier.infect("flu", 3);
        let flu = DiseaseId::from("flu");
        assert_eq!(carrier.demote(&flu), Some((3, 2)));
        assert_eq!(carrier.demote(&flu), Some((2, 1)));
        assert_eq!(carrier.demote(&flu), None);
        assert_eq!(carrier.stage_of(&flu), Some(1));
    }

    #[test]
    fn demote_unknown_disease_is_noop() {
        let mut carrier = DiseaseCarrier::new();
        assert_eq!(carrier.demote(&DiseaseId::from("flu")), None);
        assert!(carrier.active.is_empty());
    }

    #[test]
    fn infect_clamps_stage_zero() {
        let mut carrier = DiseaseCarrier::new();
        carrier.infect("flu", 0);
        assert_eq!(carrier.stage_of(&DiseaseId::from("flu")), Some(1));
    }

    #[test]
    fn immunity_only_rises() {
        let mut carrier = DiseaseCarrier::new();
        let flu = DiseaseId::from("flu");
        carrier.raise_immunity(flu.clone(), 0.4);
        carrier.raise_immunity(flu.clone(), 0.2);
        assert_eq!(carrier.immunity(&flu), 0.4);
        carrier.raise_immunity(flu.clone(), 0.9);
        assert_eq!(carrier.immunity(&flu), 0.9);
    }

    #[test]
    fn suppression_window_is_half_open() {
        let mut carrier = DiseaseCarrier::new();
        let cough = SymptomId::from("cough");
        carrier.suppress(cough.clone(), SimTime::from_secs(10));
        assert!(carrier.is_suppressed(&cough, SimTime::from_secs(0)));
        assert!(carrier.is_suppressed(&cough, SimTime::from_millis(9_999)));
        assert!(!carrier.is_suppressed(&cough, SimTime::from_secs(10)));
        assert!(!carrier.is_suppressed(&SymptomId::from("fever"), SimTime::ZERO));
    }

    #[test]
    fn survives_save_round_trip() {
        let mut carrier = DiseaseCarrier::new();
        carrier.infect("flu", 2);
        carrier.suppress(SymptomId::from("cough"), SimTime::from_secs(5));
        carrier.raise_immunity(DiseaseId::from("cold"), 1.0);
        let json = serde_json::to_string(&carrier).unwrap();
        let back: DiseaseCarrier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, carrier);
    }

    #[test]
    fn saves_without_natural_immunities_still_load() {
        let json = r#"{ "active": { "flu": 1 }, "suppressed": {}, "immunity": {} }"#;
        let carrier: DiseaseCarrier = serde_json::from_str(json).unwrap();
        assert!(carrier.natural_immunities.is_empty());
        assert_eq!(carrier.stage_of(&DiseaseId::from("flu")), Some(1));
    }
}
