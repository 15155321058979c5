use std::hash::{DefaultHasher, Hash, Hasher};

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::cure::CureRng;

/// Cure engine configuration.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CureConfig {
    pub seed: u64,
    /// Simulated seconds per `SimTick` run.
    pub tick_seconds: f32,
    /// Cure cycles run every this many ticks. Zero is treated as one.
    pub evaluation_interval: u64,
    /// Per-second chance that a dead carrier sheds one disease.
    pub deceased_cure_rate: f32,
}

impl Default for CureConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_seconds: 1.0,
            evaluation_interval: 1,
            deceased_cure_rate: 0.005,
        }
    }
}

impl CureConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn interval(&self) -> u64 {
        self.evaluation_interval.max(1)
    }

    /// Simulated seconds between two cure cycles.
    pub fn cycle_seconds(&self) -> f32 {
        self.tick_seconds * self.interval() as f32
    }

    /// Per-cycle chance that a dead carrier sheds a disease.
    pub fn deceased_chance(&self) -> f32 {
        self.deceased_cure_rate * self.cycle_seconds()
    }
}

/// Global seed every per-domain RNG is derived from.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSeed(pub u64);

/// RNG for cure systems, reseeded every tick so results do not depend on
/// how many draws other systems made.
#[derive(Resource)]
pub struct DiseaseRng(pub SmallRng);

impl Default for DiseaseRng {
    fn default() -> Self {
        Self(SmallRng::seed_from_u64(0))
    }
}

impl CureRng for DiseaseRng {
    fn prob(&mut self, chance: f32) -> bool {
        self.0.prob(chance)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.pick(len)
    }
}

/// Derive a deterministic per-domain seed from the global seed, domain name, and tick count.
fn derive_domain_seed(seed: u64, domain: &str, tick: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    tick.hash(&mut hasher);
    hasher.finish()
}

/// Exclusive system that re-seeds the cure RNG each tick.
/// Runs in `SimPhase::PreUpdate` before any cure systems.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimSeed>().0;
    let tick = world.resource::<crate::ecs::clock::SimClock>().tick_count;
    world.resource_mut::<DiseaseRng>().0 =
        SmallRng::seed_from_u64(derive_domain_seed(seed, "disease", tick));
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = CureConfig::from_json_str(r#"{ "seed": 7, "evaluation_interval": 2 }"#)
            .expect("valid config");
        assert_eq!(config.seed, 7);
        assert_eq!(config.tick_seconds, 1.0);
        assert_eq!(config.cycle_seconds(), 2.0);
        assert!((config.deceased_chance() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn zero_interval_is_every_tick() {
        let config = CureConfig {
            evaluation_interval: 0,
            ..CureConfig::default()
        };
        assert_eq!(config.interval(), 1);
    }

    #[test]
    fn domain_seed_varies_by_tick() {
        assert_eq!(
            derive_domain_seed(42, "disease", 3),
            derive_domain_seed(42, "disease", 3)
        );
        assert_ne!(
            derive_domain_seed(42, "disease", 3),
            derive_domain_seed(42, "disease", 4)
        );
    }

    #[test]
    fn reseed_is_reproducible() {
        let mut world = World::new();
        world.insert_resource(SimSeed(9));
        world.insert_resource(crate::ecs::clock::SimClock::new(1.0));
        world.init_resource::<DiseaseRng>();

        distribute_rng(&mut world);
        let first: u64 = world.resource_mut::<DiseaseRng>().0.random();
        distribute_rng(&mut world);
        let second: u64 = world.resource_mut::<DiseaseRng>().0.random();
        assert_eq!(first, second);
    }
}
