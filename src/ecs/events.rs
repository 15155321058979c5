use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{DiseaseId, SymptomBehavior, SymptomId};

/// User-facing notification produced by a cure. `key` is a localization key;
/// presentation is left to whoever reads these.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct CureNotification {
    pub carrier: Entity,
    pub key: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymptomHook {
    /// The disease this symptom belonged to was fully cured.
    DiseaseCured,
    /// This symptom alone was suppressed.
    SymptomCured,
}

/// Lifecycle hook for one symptom behavior. Behavior implementations subscribe
/// to these and filter on `behavior.kind`.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct SymptomHookMessage {
    pub hook: SymptomHook,
    pub carrier: Entity,
    pub disease: DiseaseId,
    pub symptom: SymptomId,
    pub behavior: SymptomBehavior,
}
