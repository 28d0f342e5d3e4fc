use crate::domain::PhysicsTuning;
use crate::systems::entity::BodyId;
use crate::systems::entity_system::EntitySystem;

use super::StepCounters;

/// Rebound impulse proportional to the distance fallen since `fall_start`.
///
/// The same velocity is handed to every body reachable through ropes (one
/// pass, no recursive impulses), so a roped chain bounces together. No-op if
/// bouncing is off for this body or no fall is being tracked.
pub fn bounce(entities: &mut EntitySystem, id: BodyId, tuning: &PhysicsTuning, counters: &mut StepCounters) {
    let Some(body) = entities.get_alive(id) else {
        return;
    };
    if !body.options.bounce {
        return;
    }
    let Some(fall_start) = body.fall_start else {
        return;
    };

    let velocity = ((body.pos.y - fall_start.y) / tuning.bounce_divisor).max(0.0);

    for other in entities.reachable(id) {
        let Some(linked) = entities.get_mut(other) else {
            continue;
        };
        if !linked.options.bounce {
            continue;
        }
        linked.bounce_velocity = (linked.bounce_velocity + velocity).max(0.0);
        linked.fall_start = None;
    }

    if let Some(body) = entities.get_mut(id) {
        body.fall_start = None;
        body.bounce_velocity = (body.bounce_velocity + velocity).max(0.0);
    }
    counters.bounces += 1;
}
