use std::path::PathBuf;

use thiserror::Error;

use crate::model::{DiseaseId, ReagentId, SymptomId};

/// Failures raised while loading or validating a disease catalog.
///
/// Tick-time evaluation never returns these; a bad catalog is rejected at load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate disease id {0}")]
    DuplicateDisease(DiseaseId),

    #[error("duplicate symptom id {0}")]
    DuplicateSymptom(SymptomId),

    #[error("duplicate reagent id {0}")]
    DuplicateReagent(ReagentId),

    #[error("disease {0} defines no stages")]
    NoStages(DiseaseId),

    #[error("disease {disease} declares stage 0; stages start at 1")]
    ZeroStage { disease: DiseaseId },

    #[error("disease {disease} declares stage {stage} more than once")]
    DuplicateStage { disease: DiseaseId, stage: u32 },

    #[error("disease {disease} stage {stage} references unknown symptom {symptom}")]
    UnknownSymptom {
        disease: DiseaseId,
        stage: u32,
        symptom: SymptomId,
    },
}
