use bevy_app::App;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::resources::{CureConfig, DiseaseRng, SimSeed, distribute_rng};
use super::schedule::{SimPhase, configure_sim_schedule};

/// Build a headless Bevy app with simulation clock, RNG resources and the
/// `SimTick` schedule. Add `DiseaseCurePlugin` to get cure evaluation.
///
/// Manual tick control:
/// ```no_run
/// # use disease_cure::ecs::{build_sim_app, DiseaseCurePlugin, SimTick};
/// # use disease_cure::ecs::resources::CureConfig;
/// let mut app = build_sim_app(CureConfig::default());
/// app.add_plugins(DiseaseCurePlugin);
/// for _ in 0..600 {  // ten minutes of one-second ticks
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(config: CureConfig) -> App {
    build_sim_app_with_executor(config, ExecutorKind::MultiThreaded)
}

/// Build a headless Bevy app with single-threaded executor for reproducible determinism.
///
/// Use this when exact RNG consumption order across ticks must be identical across runs.
pub fn build_sim_app_deterministic(config: CureConfig) -> App {
    build_sim_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_sim_app_with_executor(config: CureConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    app.insert_resource(SimClock::new(config.tick_seconds));
    app.insert_resource(SimSeed(config.seed));
    // Reseeded each tick by distribute_rng
    app.init_resource::<DiseaseRng>();
    app.insert_resource(config);

    // Message rotation + RNG distribution
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(distribute_rng.in_set(SimPhase::PreUpdate));
    app.add_schedule(schedule);
    app
}
