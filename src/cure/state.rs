use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::{DiseaseId, SymptomId};

/// Position of a cure step within the catalog, stable across catalog reloads.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CureStepSlot {
    /// A step declared on a specific stage.
    Stage { stage: u32, index: usize },
    /// A step from the disease-level fallback list.
    Disease { index: usize },
    /// A step declared on a symptom prototype.
    Symptom { symptom: SymptomId, index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CureStateKey {
    pub carrier: Entity,
    pub disease: DiseaseId,
    pub slot: CureStepSlot,
}

/// Accumulated evaluation count for a time-based cure step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CureTicker {
    pub ticks: u32,
}

/// In-progress accumulation for every (carrier, disease, step) triple.
///
/// Engine-owned and never saved: losing it only restarts accumulation.
#[derive(Resource, Debug, Clone, Default)]
pub struct CureStateStore {
    entries: BTreeMap<CureStateKey, CureTicker>,
}

impl CureStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticker for `key`, created zeroed on first access.
    pub fn ticker_mut(&mut self, key: CureStateKey) -> &mut CureTicker {
        self.entries.entry(key).or_default()
    }

    pub fn ticker(&self, key: &CureStateKey) -> Option<CureTicker> {
        self.entries.get(key).copied()
    }

    /// Drop every entry belonging to `disease` on `carrier`.
    pub fn forget_disease(&mut self, carrier: Entity, disease: &DiseaseId) {
        self.entries
            .retain(|key, _| !(key.carrier == carrier && &key.disease == disease));
    }

    /// Keep only entries whose key satisfies `keep`. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&CureStateKey) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| keep(key));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
