use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use super::time::SimTime;

/// Simulation clock resource tracking the current time and tick count.
///
/// Advances by a fixed tick length. The `advance_clock` system moves the clock
/// forward at the end of each tick (in `SimPhase::Last`), so systems see the
/// current time before it advances.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    pub time: SimTime,
    pub tick_count: u64,
    tick_millis: u64,
}

impl SimClock {
    /// A clock at time zero whose ticks last `tick_seconds` (at least one millisecond).
    pub fn new(tick_seconds: f32) -> Self {
        Self {
            time: SimTime::ZERO,
            tick_count: 0,
            tick_millis: SimTime::from_secs_f32(tick_seconds).as_millis().max(1),
        }
    }

    pub fn tick_seconds(&self) -> f32 {
        SimTime::from_millis(self.tick_millis).as_secs_f32()
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.time = SimTime::from_millis(self.time.as_millis() + self.tick_millis);
        self.tick_count += 1;
    }
}

/// Bevy system that advances the simulation clock by one tick.
/// Registered in `SimPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
