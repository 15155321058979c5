use bevy_ecs::entity::Entity;

use crate::ecs::events::{CureNotification, SymptomHook, SymptomHookMessage};
use crate::model::{DiseaseId, SymptomBehavior, SymptomId};

pub const DISEASE_CURED: &str = "disease-cured";
pub const SYMPTOM_CURED: &str = "disease-symptom-cured";

/// Outward side effects of a cure decision.
///
/// Implementations must not call back into the dispatcher.
pub trait CureEffects {
    /// Fire-and-forget, user-facing message for `carrier`.
    fn notify(&mut self, carrier: Entity, key: &'static str);

    /// A symptom behavior's disease-cured hook.
    fn disease_cured(
        &mut self,
        carrier: Entity,
        disease: &DiseaseId,
        symptom: &SymptomId,
        behavior: &SymptomBehavior,
    );

    /// A symptom behavior's symptom-cured hook.
    fn symptom_cured(
        &mut self,
        carrier: Entity,
        disease: &DiseaseId,
        symptom: &SymptomId,
        behavior: &SymptomBehavior,
    );
}

/// Buffers effects so they can be flushed as messages once evaluation is done.
#[derive(Debug, Clone, Default)]
pub struct RecordedEffects {
    pub notifications: Vec<CureNotification>,
    pub hooks: Vec<SymptomHookMessage>,
}

impl RecordedEffects {
    pub fn new() -> Self {
        Self::default()
    }

    fn hook(
        &mut self,
        hook: SymptomHook,
        carrier: Entity,
        disease: &DiseaseId,
        symptom: &SymptomId,
        behavior: &SymptomBehavior,
    ) {
        self.hooks.push(SymptomHookMessage {
            hook,
            carrier,
            disease: disease.clone(),
            symptom: symptom.clone(),
            behavior: behavior.clone(),
        });
    }
}

impl CureEffects for RecordedEffects {
    fn notify(&mut self, carrier: Entity, key: &'static str) {
        self.notifications.push(CureNotification { carrier, key });
    }

    fn disease_cured(
        &mut self,
        carrier: Entity,
        disease: &DiseaseId,
        symptom: &SymptomId,
        behavior: &SymptomBehavior,
    ) {
        self.hook(SymptomHook::DiseaseCured, carrier, disease, symptom, behavior);
    }

    fn symptom_cured(
        &mut self,
        carrier: Entity,
        disease: &DiseaseId,
        symptom: &SymptomId,
        behavior: &SymptomBehavior,
    ) {
        self.hook(SymptomHook::SymptomCured, carrier, disease, symptom, behavior);
    }
}
