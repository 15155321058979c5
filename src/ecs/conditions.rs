use bevy_ecs::system::Res;

use super::clock::SimClock;
use super::resources::CureConfig;

fn cycle_check(tick_count: u64, interval: u64) -> bool {
    tick_count.is_multiple_of(interval.max(1))
}

/// Run condition: true on ticks where a cure cycle is due.
pub fn cure_cycle(clock: Res<SimClock>, config: Res<CureConfig>) -> bool {
    cycle_check(clock.tick_count, config.interval())
}
