use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::Deserialize;

use crate::error::CatalogError;

use super::disease::{DiseasePrototype, DiseaseSymptomPrototype, ReagentPrototype, StageConfig};
use super::ids::{DiseaseId, ReagentId, SymptomId};

/// On-disk shape of a catalog document.
#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    diseases: Vec<DiseasePrototype>,
    #[serde(default)]
    symptoms: Vec<DiseaseSymptomPrototype>,
    #[serde(default)]
    reagents: Vec<ReagentPrototype>,
}

/// Read-only prototype catalog consulted by the cure engine.
#[derive(Resource, Debug, Clone, Default)]
pub struct DiseaseCatalog {
    diseases: BTreeMap<DiseaseId, DiseasePrototype>,
    symptoms: BTreeMap<SymptomId, DiseaseSymptomPrototype>,
    reagents: BTreeMap<ReagentId, ReagentPrototype>,
}

impl DiseaseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for disease in doc.diseases {
            if catalog.diseases.contains_key(&disease.id) {
                return Err(CatalogError::DuplicateDisease(disease.id));
            }
            catalog.diseases.insert(disease.id.clone(), disease);
        }
        for symptom in doc.symptoms {
            if catalog.symptoms.contains_key(&symptom.id) {
                return Err(CatalogError::DuplicateSymptom(symptom.id));
            }
            catalog.symptoms.insert(symptom.id.clone(), symptom);
        }
        for reagent in doc.reagents {
            if catalog.reagents.contains_key(&reagent.id) {
                return Err(CatalogError::DuplicateReagent(reagent.id));
            }
            catalog.reagents.insert(reagent.id.clone(), reagent);
        }

        catalog.validate()?;
        tracing::debug!(
            diseases = catalog.diseases.len(),
            symptoms = catalog.symptoms.len(),
            "loaded disease catalog"
        );
        Ok(catalog)
    }

    /// Read, parse, and validate a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json).inspect_err(|err| {
            tracing::warn!("rejected disease catalog {}: {err}", path.display());
        })
    }

    /// Check structural invariants the cure engine relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for disease in self.diseases.values() {
            if disease.stages.is_empty() {
                return Err(CatalogError::NoStages(disease.id.clone()));
            }
            let mut seen = BTreeSet::new();
            for stage in &disease.stages {
                if stage.stage == 0 {
                    return Err(CatalogError::ZeroStage {
                        disease: disease.id.clone(),
                    });
                }
                if !seen.insert(stage.stage) {
                    return Err(CatalogError::DuplicateStage {
                        disease: disease.id.clone(),
                        stage: stage.stage,
                    });
                }
                if let Some(symptom) = stage
                    .symptoms
                    .iter()
                    .find(|s| !self.symptoms.contains_key(*s))
                {
                    return Err(CatalogError::UnknownSymptom {
                        disease: disease.id.clone(),
                        stage: stage.stage,
                        symptom: symptom.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn with_disease(mut self, disease: DiseasePrototype) -> Self {
        self.diseases.insert(disease.id.clone(), disease);
        self
    }

    pub fn with_symptom(mut self, symptom: DiseaseSymptomPrototype) -> Self {
        self.symptoms.insert(symptom.id.clone(), symptom);
        self
    }

    pub fn with_reagent(mut self, id: impl Into<ReagentId>, name: impl Into<String>) -> Self {
        let id = id.into();
        self.reagents.insert(
            id.clone(),
            ReagentPrototype {
                id,
                name: name.into(),
            },
        );
        self
    }

    pub fn disease(&self, id: &DiseaseId) -> Option<&DiseasePrototype> {
        self.diseases.get(id)
    }

    pub fn symptom(&self, id: &SymptomId) -> Option<&DiseaseSymptomPrototype> {
        self.symptoms.get(id)
    }

    /// Stage config for `number` of `disease`, if both exist.
    pub fn stage(&self, disease: &DiseaseId, number: u32) -> Option<&StageConfig> {
        self.disease(disease)?.stage(number)
    }

    /// Display name of a reagent, or its raw id when the catalog has no entry.
    pub fn reagent_name<'a>(&'a self, id: &'a ReagentId) -> &'a str {
        self.reagents
            .get(id)
            .map_or(id.as_str(), |r| r.name.as_str())
    }

    pub fn diseases(&self) -> impl Iterator<Item = &DiseasePrototype> {
        self.diseases.values()
    }
}
