#[macro_use]
mod macros;

pub mod catalog;
pub mod disease;
pub mod ids;

pub use catalog::DiseaseCatalog;
pub use disease::{
    DiseasePrototype, DiseaseSymptomPrototype, ReagentPrototype, StageConfig, SymptomBehavior,
};
pub use ids::{DiseaseId, ReagentId, SymptomId};
