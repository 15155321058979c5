pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod conditions;
pub mod events;
pub mod resources;
pub mod schedule;
pub mod systems;
pub mod time;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::{build_sim_app, build_sim_app_deterministic, build_sim_app_with_executor};
pub use clock::SimClock;
pub use commands::CureCommand;
pub use components::{
    BodyTemperature, ChemicalStore, Deceased, DiseaseCarrier, MetabolicRate, RestState,
};
pub use conditions::cure_cycle;
pub use events::{CureNotification, SymptomHook, SymptomHookMessage};
pub use resources::{CureConfig, CureLog, CureRecord, CureRecordKind, DiseaseRng, SimSeed};
pub use schedule::{CureSet, SimPhase, SimTick, configure_sim_schedule};
pub use systems::cure::DiseaseCurePlugin;
pub use time::SimTime;
