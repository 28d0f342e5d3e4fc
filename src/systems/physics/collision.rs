use crate::domain::PhysicsTuning;
use crate::systems::entity::BodyId;
use crate::systems::entity_system::EntitySystem;

use super::{bounce, StepCounters};

/// Push away from the first overlapping body (creation order, no sorting).
///
/// A collider lower on the canvas (greater `y`) is ground: the body bounces
/// off it before being pushed. Returns whether it fired.
pub fn update_collisions(
    entities: &mut EntitySystem,
    id: BodyId,
    tuning: &PhysicsTuning,
    counters: &mut StepCounters,
) -> bool {
    let Some(body) = entities.get(id) else {
        return false;
    };
    if !body.options.collision_enabled {
        return false;
    }
    let own_y = body.pos.y;

    let Some(other) = entities.first_collision(id) else {
        return false;
    };
    let Some(collider) = entities.get(other) else {
        return false;
    };
    let collider_middle = collider.middle();
    let collider_below = collider.pos.y > own_y;

    if collider_below {
        bounce(entities, id, tuning, counters);
    }

    let Some(body) = entities.get_mut(id) else {
        return false;
    };
    let motion = body.middle().motion_reversed_to(collider_middle) * tuning.collision_push;
    body.translate(motion);
    body.decay_momentum(tuning.collision_momentum_decay);
    true
}
