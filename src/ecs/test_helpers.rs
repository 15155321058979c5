use bevy_app::App;

use crate::ecs::resources::CureConfig;
use crate::ecs::schedule::SimTick;

/// Run enough ticks for `n` cure cycles, given the app's evaluation interval.
pub fn tick_cycles(app: &mut App, n: u64) {
    let interval = app.world().resource::<CureConfig>().interval();
    for _ in 0..n * interval {
        app.world_mut().run_schedule(SimTick);
    }
}
