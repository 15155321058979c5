//! Disease cure systems.
//!
//! One spawn-time system (PreUpdate):
//! 1. `seed_natural_immunities` - grant full immunity to each newly added
//!    carrier's natural immunities
//!
//! One periodic system (Update, `CureSet::Evaluate`, run-if `cure_cycle`):
//! 2. `evaluate_disease_cures` - stage and symptom cure steps per carrier,
//!    paced by `MetabolicRate`; deceased carriers fade instead
//!
//! Command applicator (PostUpdate):
//! 3. `apply_cure_commands` - CureAll, AttemptCure, Vaccinate
//!
//! Cleanup (Last, `CureSet::Cleanup`):
//! 4. `prune_cure_state` - drop counters for despawned or cured carriers

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageRegistry, MessageWriter};
use bevy_ecs::query::{Added, Has};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::cure::{CarrierVitals, CureCycle, CureOutcome, CureStateStore, RecordedEffects};
use crate::ecs::clock::SimClock;
use crate::ecs::commands::{CureCommand, apply_cure_commands};
use crate::ecs::components::{
    BodyTemperature, ChemicalStore, Deceased, DiseaseCarrier, MetabolicRate, RestState,
};
use crate::ecs::conditions::cure_cycle;
use crate::ecs::events::{CureNotification, SymptomHookMessage};
use crate::ecs::resources::{CureConfig, CureLog, CureRecordKind, DiseaseRng};
use crate::ecs::schedule::{CureSet, SimPhase, SimTick};
use crate::ecs::time::SimTime;
use crate::model::{DiseaseCatalog, DiseaseId};

/// Periodic cure evaluation, cure commands, and runtime state cleanup.
pub struct DiseaseCurePlugin;

impl Plugin for DiseaseCurePlugin {
    fn build(&self, app: &mut App) {
        MessageRegistry::register_message::<CureCommand>(app.world_mut());
        MessageRegistry::register_message::<CureNotification>(app.world_mut());
        MessageRegistry::register_message::<SymptomHookMessage>(app.world_mut());

        app.init_resource::<CureConfig>();
        app.init_resource::<DiseaseRng>();
        app.init_resource::<DiseaseCatalog>();
        app.init_resource::<CureStateStore>();
        app.init_resource::<CureLog>();

        app.add_systems(SimTick, seed_natural_immunities.in_set(SimPhase::PreUpdate));
        app.add_systems(
            SimTick,
            evaluate_disease_cures
                .run_if(cure_cycle)
                .in_set(CureSet::Evaluate),
        );
        app.add_systems(SimTick, apply_cure_commands.in_set(SimPhase::PostUpdate));
        app.add_systems(SimTick, prune_cure_state.in_set(CureSet::Cleanup));
    }
}

type CarrierQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut DiseaseCarrier,
        Option<&'static BodyTemperature>,
        Option<&'static ChemicalStore>,
        Option<&'static RestState>,
        Option<&'static mut MetabolicRate>,
        Has<Deceased>,
    ),
>;

/// New carriers start fully immune to their natural immunities.
fn seed_natural_immunities(
    catalog: Res<DiseaseCatalog>,
    mut carriers: Query<(Entity, &mut DiseaseCarrier), Added<DiseaseCarrier>>,
) {
    for (carrier, mut state) in carriers.iter_mut() {
        if state.natural_immunities.is_empty() {
            continue;
        }
        let natural: Vec<DiseaseId> = state.natural_immunities.iter().cloned().collect();
        for disease in natural {
            if catalog.disease(&disease).is_none() {
                tracing::warn!(?carrier, %disease, "natural immunity to unknown disease");
                continue;
            }
            state.raise_immunity(disease, 1.0);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn evaluate_disease_cures(
    catalog: Res<DiseaseCatalog>,
    config: Res<CureConfig>,
    clock: Res<SimClock>,
    mut store: ResMut<CureStateStore>,
    mut rng: ResMut<DiseaseRng>,
    mut log: ResMut<CureLog>,
    mut carriers: CarrierQuery,
    mut notifications: MessageWriter<CureNotification>,
    mut hooks: MessageWriter<SymptomHookMessage>,
) {
    let now = clock.time;
    let deceased_chance = config.deceased_chance();
    let mut effects = RecordedEffects::new();
    let mut cycle = CureCycle {
        catalog: &catalog,
        store: &mut store,
        rng: &mut *rng,
        effects: &mut effects,
        now,
    };

    for (carrier, mut state, temperature, chemicals, rest, metabolism, deceased) in
        carriers.iter_mut()
    {
        if state.active.is_empty() {
            continue;
        }

        if deceased {
            if let Some(disease) = cycle.fade_deceased(carrier, &mut state, deceased_chance) {
                log.push(now, carrier, disease, CureRecordKind::Cured);
            }
            continue;
        }

        let runs = metabolism.map_or(1, |mut rate| rate.due());
        let vitals = CarrierVitals {
            temperature: temperature.map(|t| t.0),
            chemicals,
            rest: rest.copied(),
        };
        for _ in 0..runs {
            let diseases: Vec<DiseaseId> = state.active.keys().cloned().collect();
            for disease in diseases {
                let outcome = cycle.evaluate_stage(carrier, &mut state, &vitals, &disease);
                record_outcome(&mut log, now, carrier, disease, outcome);
            }
        }
    }

    notifications.write_batch(effects.notifications);
    hooks.write_batch(effects.hooks);
}

fn record_outcome(
    log: &mut CureLog,
    now: SimTime,
    carrier: Entity,
    disease: DiseaseId,
    outcome: CureOutcome,
) {
    if let Some((from, to)) = outcome.demoted {
        log.push(now, carrier, disease.clone(), CureRecordKind::Demoted { from, to });
    }
    for (symptom, until) in outcome.suppressed {
        log.push(
            now,
            carrier,
            disease.clone(),
            CureRecordKind::SymptomSuppressed { symptom, until },
        );
    }
    if outcome.cured {
        log.push(now, carrier, disease, CureRecordKind::Cured);
    }
}

/// Drop rule counters whose carrier is gone or no longer has the disease.
fn prune_cure_state(mut store: ResMut<CureStateStore>, carriers: Query<&DiseaseCarrier>) {
    if store.is_empty() {
        return;
    }
    let dropped = store.retain(|key| {
        carriers
            .get(key.carrier)
            .is_ok_and(|state| state.has_disease(&key.disease))
    });
    if dropped > 0 {
        tracing::trace!(dropped, "pruned stale cure state");
    }
}
