//! Disease cure evaluation: rule conditions, their runtime counters, and the
//! dispatcher that turns passing rules into cures, demotions and symptom relief.

pub mod diagnosis;
pub mod dispatcher;
pub mod effects;
pub mod rng;
pub mod state;
pub mod steps;

pub use diagnosis::{cure_resist_label, diagnosis_report};
pub use dispatcher::{CureCycle, CureOutcome};
pub use effects::{CureEffects, DISEASE_CURED, RecordedEffects, SYMPTOM_CURED};
pub use rng::{CureRng, FixedRoll};
pub use state::{CureStateKey, CureStateStore, CureStepSlot, CureTicker};
pub use steps::{
    BedrestStep, CarrierVitals, CureStep, CureStepKind, ReagentRequirement, ReagentStep,
    TemperatureStep, WaitStep,
};
