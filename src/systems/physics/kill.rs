use crate::systems::entity::BodyId;
use crate::systems::entity_system::EntitySystem;

use super::StepCounters;

/// Apply kill-on-contact for `id`.
///
/// A killer removes every live non-killer it overlaps; a non-killer touching
/// any killer removes itself. Killers never kill each other. Overlap is
/// checked whether or not `collision_enabled` is set.
///
/// Returns `true` when `id` itself died (its update must stop).
pub fn resolve_kills(entities: &mut EntitySystem, id: BodyId, counters: &mut StepCounters) -> bool {
    let Some(body) = entities.get_alive(id) else {
        return false;
    };
    let is_killer = body.options.killer;
    let colliders = entities.collisions(id);

    let is_killer_at = |entities: &EntitySystem, other: BodyId| {
        entities.get(other).map_or(false, |o| o.options.killer)
    };

    if is_killer {
        for other in colliders {
            if !is_killer_at(entities, other) && entities.kill(other) {
                counters.kills += 1;
            }
        }
        return false;
    }

    if colliders.iter().any(|&other| is_killer_at(entities, other)) {
        if entities.kill(id) {
            counters.kills += 1;
        }
        return true;
    }

    false
}
