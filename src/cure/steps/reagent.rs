use serde::{Deserialize, Serialize};

use crate::ecs::components::ChemicalStore;
use crate::model::{DiseaseCatalog, ReagentId};

use super::number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReagentRequirement {
    pub reagent: ReagentId,
    pub quantity: f32,
}

impl ReagentRequirement {
    pub fn new(reagent: impl Into<ReagentId>, quantity: f32) -> Self {
        Self {
            reagent: reagent.into(),
            quantity,
        }
    }
}

/// Every listed reagent present at once, at or above its minimum.
/// Reagents are only inspected, never consumed. An empty list never passes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReagentStep {
    #[serde(default)]
    pub requirements: Vec<ReagentRequirement>,
}

impl ReagentStep {
    pub(super) fn evaluate(&self, chemicals: Option<&ChemicalStore>) -> bool {
        let Some(chemicals) = chemicals else {
            return false;
        };
        !self.requirements.is_empty()
            && self
                .requirements
                .iter()
                .all(|req| chemicals.quantity(&req.reagent) >= req.quantity)
    }

    pub(super) fn describe(&self, catalog: &DiseaseCatalog) -> Vec<String> {
        if self.requirements.is_empty() {
            return vec!["No reagent is known to help.".to_string()];
        }
        let mut lines = Vec::with_capacity(self.requirements.len() + 1);
        lines.push("Requires all of the following in the bloodstream:".to_string());
        for req in &self.requirements {
            lines.push(format!(
                "  {}u {}",
                number(req.quantity),
                catalog.reagent_name(&req.reagent)
            ));
        }
        lines
    }
}
