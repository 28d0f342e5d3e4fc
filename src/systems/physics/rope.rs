use crate::domain::PhysicsTuning;
use crate::systems::entity::BodyId;
use crate::systems::entity_system::EntitySystem;
use crate::systems::vector::Vec2;

/// Farthest live connected body whose middle is more than `limit` away.
///
/// Strict `>` on both the limit and the running maximum: on equal distances
/// the first in connection order wins.
fn farthest_beyond(entities: &EntitySystem, id: BodyId, limit: f32) -> Option<(Vec2, f32)> {
    let from = entities.get(id)?.middle();
    let mut best: Option<(Vec2, f32)> = None;

    for other in entities.connections(id) {
        let Some(target) = entities.get(other) else {
            continue;
        };
        let middle = target.middle();
        let distance = from.distance(middle);
        if distance > limit && best.map_or(true, |(_, d)| distance > d) {
            best = Some((middle, distance));
        }
    }

    best
}

/// Hard tier: if any rope is stretched past `rope_max_tension`, jump toward
/// the farthest partner by `(distance - rope_tension) / hard_rope_divisor`.
///
/// Returns whether it fired.
pub fn update_max_rope_tension(entities: &mut EntitySystem, id: BodyId, tuning: &PhysicsTuning) -> bool {
    let Some(body) = entities.get(id) else {
        return false;
    };
    let Some(max_tension) = body.options.rope_max_tension else {
        return false;
    };
    let tension = body.options.rope_tension.unwrap_or(0.0);
    let from = body.middle();

    let Some((target, distance)) = farthest_beyond(entities, id, max_tension) else {
        return false;
    };

    let pull = (distance - tension) / tuning.hard_rope_divisor;
    let motion = from.motion_to(target) * pull;

    let Some(body) = entities.get_mut(id) else {
        return false;
    };
    body.translate(motion);
    body.decay_momentum(tuning.rope_momentum_decay);
    true
}

/// Soft tier: if any rope is longer than `rope_tension`, take one unit step
/// toward the farthest partner.
///
/// Returns whether it fired.
pub fn update_rope_tension(entities: &mut EntitySystem, id: BodyId, tuning: &PhysicsTuning) -> bool {
    let Some(body) = entities.get(id) else {
        return false;
    };
    let Some(tension) = body.options.rope_tension else {
        return false;
    };
    let from = body.middle();

    let Some((target, _)) = farthest_beyond(entities, id, tension) else {
        return false;
    };

    let motion = from.motion_to(target);

    let Some(body) = entities.get_mut(id) else {
        return false;
    };
    body.translate(motion);
    body.decay_momentum(tuning.rope_momentum_decay);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyOptions, BodyOptionsPatch};

    fn roped() -> BodyOptionsPatch {
        BodyOptionsPatch::new()
            .with_rope_tension(Some(15.0))
            .with_rope_max_tension(Some(50.0))
    }

    #[test]
    fn hard_rope_moves_proportionally_to_overshoot() {
        let mut sys = EntitySystem::new();
        let a = sys.spawn(0.0, 0.0, &roped(), &BodyOptions::default());
        let b = sys.spawn(60.0, 80.0, &roped(), &BodyOptions::default());
        sys.connect(a, b).unwrap();
        sys.get_mut(a).unwrap().fall_momentum = 0.5;

        let before = sys.get(a).unwrap().middle();
        let target = sys.get(b).unwrap().middle();
        let distance_before = before.distance(target);
        assert!((distance_before - 100.0).abs() < 1e-4);

        assert!(update_max_rope_tension(&mut sys, a, &PhysicsTuning::default()));

        let after = sys.get(a).unwrap().middle();
        let moved = after - before;
        assert!((moved.length() - 8.5).abs() < 1e-4);
        let unit = moved * (1.0 / moved.length());
        assert!((unit.x - 0.6).abs() < 1e-4);
        assert!((unit.y - 0.8).abs() < 1e-4);
        assert!(after.distance(target) < distance_before);
        assert!((sys.get(a).unwrap().fall_momentum - 0.48).abs() < 1e-6);
    }

    #[test]
    fn hard_rope_picks_farthest_partner() {
        let mut sys = EntitySystem::new();
        let a = sys.spawn(0.0, 0.0, &roped(), &BodyOptions::default());
        let near = sys.spawn(60.0, 0.0, &roped(), &BodyOptions::default());
        let far = sys.spawn(0.0, 90.0, &roped(), &BodyOptions::default());
        sys.connect(a, near).unwrap();
        sys.connect(a, far).unwrap();

        assert!(update_max_rope_tension(&mut sys, a, &PhysicsTuning::default()));
        let pos = sys.get(a).unwrap().pos;
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.y - 7.5).abs() < 1e-4);
    }

    #[test]
    fn disabled_tiers_never_fire() {
        let mut sys = EntitySystem::new();
        let a = sys.spawn(0.0, 0.0, &BodyOptionsPatch::static_link(), &BodyOptions::default());
        let b = sys.spawn(500.0, 0.0, &BodyOptionsPatch::new(), &BodyOptions::default());
        sys.connect(a, b).unwrap();
        assert!(!update_max_rope_tension(&mut sys, a, &PhysicsTuning::default()));
        assert!(!update_rope_tension(&mut sys, a, &PhysicsTuning::default()));
        assert_eq!(sys.get(a).unwrap().pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn slack_rope_does_not_fire() {
        let mut sys = EntitySystem::new();
        let a = sys.spawn(0.0, 0.0, &roped(), &BodyOptions::default());
        let b = sys.spawn(10.0, 0.0, &roped(), &BodyOptions::default());
        sys.connect(a, b).unwrap();
        assert!(!update_max_rope_tension(&mut sys, a, &PhysicsTuning::default()));
        assert!(!update_rope_tension(&mut sys, a, &PhysicsTuning::default()));
    }

    #[test]
    fn dead_partner_is_ignored() {
        let mut sys = EntitySystem::new();
        let a = sys.spawn(0.0, 0.0, &roped(), &BodyOptions::default());
        let b = sys.spawn(200.0, 0.0, &roped(), &BodyOptions::default());
        sys.connect(a, b).unwrap();
        sys.kill(b);
        assert!(!update_max_rope_tension(&mut sys, a, &PhysicsTuning::default()));
        assert!(!update_rope_tension(&mut sys, a, &PhysicsTuning::default()));
    }
}
