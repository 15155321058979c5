use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::ecs::time::SimTime;
use crate::model::{DiseaseId, SymptomId};

#[derive(Debug, Clone, PartialEq)]
pub enum CureRecordKind {
    Cured,
    Demoted { from: u32, to: u32 },
    SymptomSuppressed { symptom: SymptomId, until: SimTime },
    Vaccinated { strength: f32 },
}

/// One audited change to a carrier's diseases.
#[derive(Debug, Clone, PartialEq)]
pub struct CureRecord {
    pub timestamp: SimTime,
    pub carrier: Entity,
    pub disease: DiseaseId,
    pub kind: CureRecordKind,
}

/// Accumulates cure records until a consumer drains them.
#[derive(Resource, Debug, Clone, Default)]
pub struct CureLog {
    pub records: Vec<CureRecord>,
}

impl CureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        timestamp: SimTime,
        carrier: Entity,
        disease: DiseaseId,
        kind: CureRecordKind,
    ) {
        self.records.push(CureRecord {
            timestamp,
            carrier,
            disease,
            kind,
        });
    }

    pub fn for_carrier(&self, carrier: Entity) -> impl Iterator<Item = &CureRecord> {
        self.records.iter().filter(move |r| r.carrier == carrier)
    }
}
