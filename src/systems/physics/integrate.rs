use crate::domain::PhysicsTuning;
use crate::systems::entity::{BodyId, Entity};
use crate::systems::vector::Vec2;

use crate::systems::entity_system::EntitySystem;

/// Stop a bounce: restart fall tracking from here with no momentum.
fn end_bounce(body: &mut Entity) {
    body.bounce_velocity = 0.0;
    body.fall_start = Some(body.pos);
    body.fall_momentum = 0.0;
}

/// Free motion for a body no constraint touched this tick.
///
/// While `bounce_velocity` is above the threshold the body rises by the
/// velocity's decay each tick; otherwise gravity pulls it down by
/// `radius * gravity + fall_momentum * radius`.
pub fn integrate(entities: &mut EntitySystem, id: BodyId, tuning: &PhysicsTuning) {
    let Some(body) = entities.get_mut(id) else {
        return;
    };

    if body.bounce_velocity > tuning.bounce_threshold {
        let decay = body.bounce_velocity * body.options.bounce_multiplier;
        body.bounce_velocity -= decay;
        body.translate(Vec2::new(0.0, -decay));
        if body.bounce_velocity <= tuning.bounce_threshold {
            end_bounce(body);
        }
        return;
    }

    if body.bounce_velocity > 0.0 {
        end_bounce(body);
    }

    let Some(gravity) = body.options.gravity else {
        return;
    };

    if body.fall_start.is_none() {
        body.fall_start = Some(body.pos);
    }
    body.fall_momentum += body.options.gravity_momentum;
    let radius = body.options.radius;
    let fall = radius * gravity + body.fall_momentum * radius;
    body.translate(Vec2::new(0.0, fall));
}
