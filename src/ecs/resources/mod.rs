pub mod cure_log;
pub mod sim_resources;

pub use cure_log::{CureLog, CureRecord, CureRecordKind};
pub use sim_resources::{CureConfig, DiseaseRng, SimSeed, distribute_rng};
