use crate::domain::PhysicsTuning;
use crate::systems::entity::BodyId;
use crate::systems::entity_system::EntitySystem;

use super::{bounce, StepCounters};

/// Which canvas edges a body was clamped against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundsHit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundsHit {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Keep a live body inside `[0, width - r/2] x [0, height - r/2]`.
///
/// Any clamp zeroes `fall_momentum`; the floor clamp also bounces.
pub fn clamp_to_bounds(
    entities: &mut EntitySystem,
    id: BodyId,
    width: f32,
    height: f32,
    tuning: &PhysicsTuning,
    counters: &mut StepCounters,
) -> BoundsHit {
    let mut hit = BoundsHit::default();
    let Some(body) = entities.get_mut(id) else {
        return hit;
    };
    if !body.alive {
        return hit;
    }

    let half = body.options.radius / 2.0;

    if body.pos.x < 0.0 {
        body.pos.x = 0.0;
        hit.left = true;
    }
    if body.pos.x > width - half {
        body.pos.x = width - half;
        hit.right = true;
    }
    if body.pos.y < 0.0 {
        body.pos.y = 0.0;
        hit.top = true;
    }
    if body.pos.y > height - half {
        body.pos.y = height - half;
        hit.bottom = true;
    }

    if hit.any() {
        body.fall_momentum = 0.0;
        counters.clamps += 1;
    }
    if hit.bottom {
        bounce(entities, id, tuning, counters);
    }

    hit
}
