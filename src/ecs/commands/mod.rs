pub mod applicator;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::DiseaseId;

pub use applicator::apply_cure_commands;

/// A request to change a carrier's diseases from outside the cure cycle.
///
/// Written via `MessageWriter<CureCommand>` and applied by `apply_cure_commands`
/// in `SimPhase::PostUpdate`.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum CureCommand {
    /// Fully cure every active disease.
    CureAll { carrier: Entity },
    /// Generic medicine: one roll at curing one disease, split across all of them.
    AttemptCure { carrier: Entity, cure_chance: f32 },
    /// Grant immunity to a disease the carrier does not currently have.
    /// `strength` defaults to the disease's post-cure immunity.
    Vaccinate {
        carrier: Entity,
        disease: DiseaseId,
        strength: Option<f32>,
    },
}

impl CureCommand {
    pub fn carrier(&self) -> Entity {
        match self {
            Self::CureAll { carrier }
            | Self::AttemptCure { carrier, .. }
            | Self::Vaccinate { carrier, .. } => *carrier,
        }
    }
}
