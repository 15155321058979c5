use serde::{Deserialize, Serialize};

use crate::cure::CureStep;

use super::ids::{DiseaseId, ReagentId, SymptomId};

const DEFAULT_CURE_RESIST: f32 = 0.05;

fn default_cure_resist() -> f32 {
    DEFAULT_CURE_RESIST
}

/// Static definition of a staged disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseasePrototype {
    pub id: DiseaseId,
    /// Display name; falls back to the id when empty.
    #[serde(default)]
    pub name: String,
    pub stages: Vec<StageConfig>,
    /// Used only when the active stage declares no cure steps of its own.
    #[serde(default)]
    pub cure_steps: Vec<CureStep>,
    #[serde(default)]
    pub post_cure_immunity: f32,
    /// Subtracted from brute-force cure attempts.
    #[serde(default = "default_cure_resist")]
    pub cure_resist: f32,
}

impl DiseasePrototype {
    pub fn new(id: impl Into<DiseaseId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            stages: Vec::new(),
            cure_steps: Vec::new(),
            post_cure_immunity: 0.0,
            cure_resist: DEFAULT_CURE_RESIST,
        }
    }

    pub fn with_stage(mut self, stage: StageConfig) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn with_cure_step(mut self, step: CureStep) -> Self {
        self.cure_steps.push(step);
        self
    }

    pub fn with_post_cure_immunity(mut self, strength: f32) -> Self {
        self.post_cure_immunity = strength;
        self
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }

    pub fn stage(&self, number: u32) -> Option<&StageConfig> {
        self.stages.iter().find(|s| s.stage == number)
    }
}

/// One severity level of a disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub stage: u32,
    #[serde(default)]
    pub symptoms: Vec<SymptomId>,
    #[serde(default)]
    pub cure_steps: Vec<CureStep>,
}

impl StageConfig {
    pub fn new(stage: u32) -> Self {
        Self {
            stage,
            symptoms: Vec::new(),
            cure_steps: Vec::new(),
        }
    }

    pub fn with_symptom(mut self, symptom: impl Into<SymptomId>) -> Self {
        self.symptoms.push(symptom.into());
        self
    }

    pub fn with_cure_step(mut self, step: CureStep) -> Self {
        self.cure_steps.push(step);
        self
    }
}

/// Static definition of a symptom that can be suppressed independently of its disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseSymptomPrototype {
    pub id: SymptomId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cure_steps: Vec<CureStep>,
    /// Seconds the symptom stays suppressed once cured. Zero disables symptom cures.
    #[serde(default)]
    pub cure_duration: f32,
    #[serde(default)]
    pub behaviors: Vec<SymptomBehavior>,
}

impl DiseaseSymptomPrototype {
    pub fn new(id: impl Into<SymptomId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            cure_steps: Vec::new(),
            cure_duration: 0.0,
            behaviors: Vec::new(),
        }
    }

    pub fn with_cure_step(mut self, step: CureStep) -> Self {
        self.cure_steps.push(step);
        self
    }

    pub fn with_cure_duration(mut self, seconds: f32) -> Self {
        self.cure_duration = seconds;
        self
    }

    pub fn with_behavior(mut self, behavior: SymptomBehavior) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}

/// Opaque handle to a symptom behavior. The cure engine only forwards these to
/// lifecycle hooks; what a behavior does is owned by its collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomBehavior {
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl SymptomBehavior {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: serde_json::Value::Null,
        }
    }
}

/// Display metadata for a reagent referenced by cure steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReagentPrototype {
    pub id: ReagentId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_lookup_is_by_number_not_position() {
        let disease = DiseasePrototype::new("flu")
            .with_stage(StageConfig::new(3))
            .with_stage(StageConfig::new(1));
        assert_eq!(disease.stage(1).map(|s| s.stage), Some(1));
        assert_eq!(disease.stage(3).map(|s| s.stage), Some(3));
        assert!(disease.stage(2).is_none());
    }

    #[test]
    fn deserialize_fills_defaults() {
        let json = r#"{ "id": "cold", "stages": [ { "stage": 1 } ] }"#;
        let disease: DiseasePrototype = serde_json::from_str(json).unwrap();
        assert_eq!(disease.display_name(), "cold");
        assert!(disease.cure_steps.is_empty());
        assert_eq!(disease.post_cure_immunity, 0.0);
        assert_eq!(disease.cure_resist, DEFAULT_CURE_RESIST);
        assert!(disease.stages[0].symptoms.is_empty());
    }

    #[test]
    fn symptom_behaviors_keep_params() {
        let json = r#"{
            "id": "cough",
            "cure_duration": 30,
            "behaviors": [ { "kind": "emote", "params": { "emote": "cough" } } ]
        }"#;
        let symptom: DiseaseSymptomPrototype = serde_json::from_str(json).unwrap();
        assert_eq!(symptom.cure_duration, 30.0);
        assert_eq!(symptom.behaviors[0].kind, "emote");
        assert_eq!(symptom.behaviors[0].params["emote"], "cough");
    }
}
