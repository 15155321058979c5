use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for the main simulation tick.
/// Run manually each tick via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each simulation tick.
///
/// Systems are assigned to phases via `.in_set(SimPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Last,
}

/// Cure systems within the phases.
///
/// `Evaluate` lives in `SimPhase::Update`; `Cleanup` in `SimPhase::Last`,
/// before the clock advances.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CureSet {
    Evaluate,
    Cleanup,
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Update,
            SimPhase::PostUpdate,
            SimPhase::Last,
        )
            .chain(),
    );
    schedule.configure_sets(CureSet::Evaluate.in_set(SimPhase::Update));
    schedule.configure_sets(CureSet::Cleanup.in_set(SimPhase::Last));
    schedule.add_systems(
        advance_clock
            .in_set(SimPhase::Last)
            .after(CureSet::Cleanup),
    );
    schedule
}
