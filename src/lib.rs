pub mod cure;
pub mod ecs;
pub mod error;
pub mod model;

pub use cure::{CureCycle, CureOutcome, CureStep, diagnosis_report};
pub use ecs::{DiseaseCurePlugin, build_sim_app};
pub use error::CatalogError;
pub use model::{DiseaseCatalog, DiseaseId, DiseasePrototype, StageConfig, SymptomId};
