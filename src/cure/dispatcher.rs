//! Per-carrier cure evaluation.
//!
//! Once per cycle for every (carrier, disease) pair:
//! 1. resolve the carrier's current stage config (missing → no-op)
//! 2. sample and evaluate the stage's cure steps, or the disease-level list
//!    when the stage declares none, demoting or curing on success
//! 3. sample and evaluate each unsuppressed symptom's own steps, suppressing
//!    the symptom for its cure duration on success

use bevy_ecs::entity::Entity;

use crate::ecs::components::DiseaseCarrier;
use crate::ecs::time::SimTime;
use crate::model::{DiseaseCatalog, DiseaseId, DiseasePrototype, StageConfig, SymptomId};

use super::effects::{CureEffects, DISEASE_CURED, SYMPTOM_CURED};
use super::rng::CureRng;
use super::state::{CureStateKey, CureStateStore, CureStepSlot, CureTicker};
use super::steps::{CarrierVitals, CureStep};

/// What one `evaluate_stage` call changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CureOutcome {
    pub cured: bool,
    /// Stage before the first demotion and after the last one this cycle.
    pub demoted: Option<(u32, u32)>,
    /// Symptoms suppressed this cycle, with the time they become active again.
    pub suppressed: Vec<(SymptomId, SimTime)>,
}

impl CureOutcome {
    pub fn is_empty(&self) -> bool {
        !self.cured && self.demoted.is_none() && self.suppressed.is_empty()
    }
}

/// Services and shared state for one evaluation pass.
pub struct CureCycle<'a> {
    pub catalog: &'a DiseaseCatalog,
    pub store: &'a mut CureStateStore,
    pub rng: &'a mut dyn CureRng,
    pub effects: &'a mut dyn CureEffects,
    pub now: SimTime,
}

impl CureCycle<'_> {
    /// Run one cure cycle of `disease_id` on `carrier`.
    pub fn evaluate_stage(
        &mut self,
        carrier: Entity,
        state: &mut DiseaseCarrier,
        vitals: &CarrierVitals<'_>,
        disease_id: &DiseaseId,
    ) -> CureOutcome {
        let mut outcome = CureOutcome::default();
        let catalog = self.catalog;

        let Some(stage_number) = state.stage_of(disease_id) else {
            tracing::trace!(?carrier, %disease_id, "carrier no longer has disease");
            return outcome;
        };
        let Some(disease) = catalog.disease(disease_id) else {
            tracing::trace!(?carrier, %disease_id, "disease missing from catalog");
            return outcome;
        };
        let Some(stage) = disease.stage(stage_number) else {
            tracing::trace!(?carrier, %disease_id, stage_number, "no config for stage");
            return outcome;
        };

        let stage_steps = !stage.cure_steps.is_empty();
        let steps = if stage_steps {
            &stage.cure_steps
        } else {
            &disease.cure_steps
        };

        for (index, step) in steps.iter().enumerate() {
            let slot = if stage_steps {
                CureStepSlot::Stage {
                    stage: stage_number,
                    index,
                }
            } else {
                CureStepSlot::Disease { index }
            };
            if !self.sample(carrier, disease_id, slot, step, vitals) || outcome.cured {
                continue;
            }
            if step.lower_stage {
                // Demotion only lands on a stage the disease configures.
                let current = state.stage_of(disease_id).unwrap_or(stage_number);
                if current <= 1 || disease.stage(current - 1).is_none() {
                    tracing::trace!(?carrier, %disease_id, current, "no configured stage below");
                    continue;
                }
                if let Some((from, to)) = state.demote(disease_id) {
                    tracing::debug!(?carrier, %disease_id, from, to, "disease stage lowered");
                    let first = outcome.demoted.map_or(from, |(first, _)| first);
                    outcome.demoted = Some((first, to));
                }
            } else {
                outcome.cured = self.apply_full_cure(carrier, state, disease, Some(stage));
            }
        }

        if outcome.cured {
            // Steps sampled after the cure may have recreated tickers.
            self.store.forget_disease(carrier, disease_id);
            return outcome;
        }

        for symptom_id in &stage.symptoms {
            if state.is_suppressed(symptom_id, self.now) {
                continue;
            }
            let Some(symptom) = catalog.symptom(symptom_id) else {
                tracing::trace!(?carrier, %symptom_id, "symptom missing from catalog");
                continue;
            };
            if !(symptom.cure_duration > 0.0) {
                continue;
            }

            let mut suppressed = false;
            for (index, step) in symptom.cure_steps.iter().enumerate() {
                let slot = CureStepSlot::Symptom {
                    symptom: symptom_id.clone(),
                    index,
                };
                if !self.sample(carrier, disease_id, slot, step, vitals) || suppressed {
                    continue;
                }
                suppressed = true;

                let until = self.now.after_secs(symptom.cure_duration);
                state.suppress(symptom_id.clone(), until);
                self.effects.notify(carrier, SYMPTOM_CURED);
                for behavior in &symptom.behaviors {
                    self.effects
                        .symptom_cured(carrier, disease_id, symptom_id, behavior);
                }
                tracing::debug!(?carrier, %disease_id, %symptom_id, %until, "symptom suppressed");
                outcome.suppressed.push((symptom_id.clone(), until));
            }
        }

        outcome
    }

    /// Fully cure `disease_id` on `carrier` regardless of its cure steps.
    ///
    /// Returns false when the carrier did not have the disease. Diseases missing
    /// from the catalog are still removed, without immunity or hooks.
    pub fn cure_disease(
        &mut self,
        carrier: Entity,
        state: &mut DiseaseCarrier,
        disease_id: &DiseaseId,
    ) -> bool {
        let catalog = self.catalog;
        match catalog.disease(disease_id) {
            Some(disease) => {
                let stage = state.stage_of(disease_id).and_then(|n| disease.stage(n));
                self.apply_full_cure(carrier, state, disease, stage)
            }
            None => {
                if state.remove(disease_id).is_none() {
                    return false;
                }
                self.store.forget_disease(carrier, disease_id);
                self.effects.notify(carrier, DISEASE_CURED);
                tracing::debug!(?carrier, %disease_id, "uncatalogued disease removed");
                true
            }
        }
    }

    /// Cure every active disease on `carrier`. Returns the cured ids.
    pub fn cure_all(&mut self, carrier: Entity, state: &mut DiseaseCarrier) -> Vec<DiseaseId> {
        let ids: Vec<DiseaseId> = state.active.keys().cloned().collect();
        ids.into_iter()
            .filter(|id| self.cure_disease(carrier, state, id))
            .collect()
    }

    /// Brute-force medicine: try to cure one disease with a generic chance.
    ///
    /// The chance is split across all active diseases and reduced by each
    /// disease's cure resistance. A split chance below zero abandons the attempt.
    pub fn attempt_cure(
        &mut self,
        carrier: Entity,
        state: &mut DiseaseCarrier,
        cure_chance: f32,
    ) -> Option<DiseaseId> {
        let count = state.active.len();
        if count == 0 {
            return None;
        }
        let ids: Vec<DiseaseId> = state.active.keys().cloned().collect();
        for id in ids {
            let resist = self.catalog.disease(&id).map_or(0.0, |d| d.cure_resist);
            let chance = cure_chance / count as f32 - resist;
            if chance < 0.0 {
                return None;
            }
            if chance >= 1.0 || self.rng.prob(chance) {
                self.cure_disease(carrier, state, &id);
                return Some(id);
            }
        }
        None
    }

    /// Dead carriers shed a random disease with probability `chance` per cycle.
    pub fn fade_deceased(
        &mut self,
        carrier: Entity,
        state: &mut DiseaseCarrier,
        chance: f32,
    ) -> Option<DiseaseId> {
        if state.active.is_empty() || !self.rng.prob(chance) {
            return None;
        }
        let index = self.rng.pick(state.active.len());
        let id = state.active.keys().nth(index)?.clone();
        self.cure_disease(carrier, state, &id).then_some(id)
    }

    /// Roll the step's sampling chance, then evaluate its condition.
    fn sample(
        &mut self,
        carrier: Entity,
        disease: &DiseaseId,
        slot: CureStepSlot,
        step: &CureStep,
        vitals: &CarrierVitals<'_>,
    ) -> bool {
        if !self.rng.prob(step.chance()) {
            return false;
        }
        let mut scratch = CureTicker::default();
        let ticker = if step.is_stateful() {
            self.store.ticker_mut(CureStateKey {
                carrier,
                disease: disease.clone(),
                slot,
            })
        } else {
            &mut scratch
        };
        step.evaluate(vitals, ticker, self.rng)
    }

    /// Remove the disease, raise immunity, notify, and run disease-cured hooks for
    /// the symptoms of `expressed` (the stage the carrier was showing).
    fn apply_full_cure(
        &mut self,
        carrier: Entity,
        state: &mut DiseaseCarrier,
        disease: &DiseasePrototype,
        expressed: Option<&StageConfig>,
    ) -> bool {
        if state.remove(&disease.id).is_none() {
            return false;
        }
        state.raise_immunity(disease.id.clone(), disease.post_cure_immunity);
        self.store.forget_disease(carrier, &disease.id);
        self.effects.notify(carrier, DISEASE_CURED);

        let catalog = self.catalog;
        for symptom_id in expressed.map(|s| s.symptoms.as_slice()).unwrap_or_default() {
            let Some(symptom) = catalog.symptom(symptom_id) else {
                continue;
            };
            for behavior in &symptom.behaviors {
                self.effects
                    .disease_cured(carrier, &disease.id, symptom_id, behavior);
            }
        }
        tracing::debug!(
            ?carrier,
            disease_id = %disease.id,
            immunity = state.immunity(&disease.id),
            "disease cured"
        );
        true
    }
}
