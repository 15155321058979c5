use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::cure::{CureCycle, CureStateStore, RecordedEffects};
use crate::ecs::clock::SimClock;
use crate::ecs::components::DiseaseCarrier;
use crate::ecs::events::{CureNotification, SymptomHookMessage};
use crate::ecs::resources::{CureLog, CureRecordKind, DiseaseRng};
use crate::ecs::time::SimTime;
use crate::model::{DiseaseCatalog, DiseaseId};

use super::CureCommand;

/// Resources pulled out of the world while commands are applied, so carrier
/// components can be borrowed mutably alongside them.
pub(crate) struct ApplyCtx {
    pub catalog: DiseaseCatalog,
    pub store: CureStateStore,
    pub rng: DiseaseRng,
    pub log: CureLog,
    pub effects: RecordedEffects,
    pub now: SimTime,
}

impl ApplyCtx {
    fn take(world: &mut World) -> Option<Self> {
        let present = world.contains_resource::<DiseaseCatalog>()
            && world.contains_resource::<CureStateStore>()
            && world.contains_resource::<DiseaseRng>()
            && world.contains_resource::<CureLog>()
            && world.contains_resource::<SimClock>();
        if !present {
            return None;
        }
        Some(Self {
            now: world.resource::<SimClock>().time,
            catalog: world.remove_resource()?,
            store: world.remove_resource()?,
            rng: world.remove_resource()?,
            log: world.remove_resource()?,
            effects: RecordedEffects::new(),
        })
    }

    fn cycle(&mut self) -> CureCycle<'_> {
        CureCycle {
            catalog: &self.catalog,
            store: &mut self.store,
            rng: &mut self.rng,
            effects: &mut self.effects,
            now: self.now,
        }
    }

    fn record_cured(&mut self, carrier: Entity, diseases: impl IntoIterator<Item = DiseaseId>) {
        for disease in diseases {
            self.log
                .push(self.now, carrier, disease, CureRecordKind::Cured);
        }
    }

    /// Flush buffered effects as messages and put the resources back.
    fn restore(self, world: &mut World) {
        let RecordedEffects {
            notifications,
            hooks,
        } = self.effects;
        if let Some(mut messages) = world.get_resource_mut::<Messages<CureNotification>>() {
            messages.write_batch(notifications);
        }
        if let Some(mut messages) = world.get_resource_mut::<Messages<SymptomHookMessage>>() {
            messages.write_batch(hooks);
        }
        world.insert_resource(self.catalog);
        world.insert_resource(self.store);
        world.insert_resource(self.rng);
        world.insert_resource(self.log);
    }
}

/// Exclusive system that drains pending `CureCommand` messages and applies them.
///
/// Runs in `SimPhase::PostUpdate`.
pub fn apply_cure_commands(world: &mut World) {
    let commands: Vec<CureCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<CureCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let Some(mut ctx) = ApplyCtx::take(world) else {
        tracing::warn!(
            dropped = commands.len(),
            "cure resources missing, commands ignored"
        );
        return;
    };

    for cmd in &commands {
        let carrier = cmd.carrier();
        let Some(mut state) = world.get_mut::<DiseaseCarrier>(carrier) else {
            tracing::debug!(?carrier, ?cmd, "cure command for non-carrier ignored");
            continue;
        };

        match cmd {
            CureCommand::CureAll { .. } => {
                let cured = ctx.cycle().cure_all(carrier, &mut state);
                ctx.record_cured(carrier, cured);
            }
            CureCommand::AttemptCure { cure_chance, .. } => {
                let cured = ctx.cycle().attempt_cure(carrier, &mut state, *cure_chance);
                ctx.record_cured(carrier, cured);
            }
            CureCommand::Vaccinate {
                disease, strength, ..
            } => {
                let Some(prototype) = ctx.catalog.disease(disease) else {
                    tracing::debug!(?carrier, %disease, "vaccine for unknown disease ignored");
                    continue;
                };
                if state.has_disease(disease) {
                    tracing::debug!(?carrier, %disease, "carrier already infected, vaccine has no effect");
                    continue;
                }
                state.raise_immunity(
                    disease.clone(),
                    strength.unwrap_or(prototype.post_cure_immunity),
                );
                let strength = state.immunity(disease);
                ctx.log.push(
                    ctx.now,
                    carrier,
                    disease.clone(),
                    CureRecordKind::Vaccinated { strength },
                );
            }
        }
    }

    ctx.restore(world);
}
