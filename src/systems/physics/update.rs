use crate::domain::PhysicsTuning;
use crate::systems::entity::BodyId;
use crate::systems::entity_system::EntitySystem;

use super::{
    integrate, resolve_kills, update_collisions, update_max_rope_tension, update_rope_tension,
    StepCounters, UpdateOutcome,
};

/// Advance one body by one tick.
pub fn update_entity(
    entities: &mut EntitySystem,
    id: BodyId,
    tuning: &PhysicsTuning,
    counters: &mut StepCounters,
) -> UpdateOutcome {
    match entities.get_mut(id) {
        Some(body) if body.alive => body.ticks += 1,
        _ => return UpdateOutcome::Skipped,
    }

    entities.prune_connections(id);

    if resolve_kills(entities, id, counters) {
        return UpdateOutcome::Killed;
    }

    if update_max_rope_tension(entities, id, tuning) {
        UpdateOutcome::HardRope
    } else if update_rope_tension(entities, id, tuning) {
        UpdateOutcome::SoftRope
    } else if update_collisions(entities, id, tuning, counters) {
        UpdateOutcome::Collision
    } else {
        integrate(entities, id, tuning);
        UpdateOutcome::Integrated
    }
}
