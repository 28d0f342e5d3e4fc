use crate::core::EngineError;
use crate::domain::BodyOptionsPatch;
use crate::systems::entity::BodyId;

use super::WorldCore;

pub(super) fn spawn(world: &mut WorldCore, x: f32, y: f32, patch: &BodyOptionsPatch) -> BodyId {
    world.entities.spawn(x, y, patch, &world.settings.defaults)
}

pub(super) fn try_spawn(world: &mut WorldCore, x: f32, y: f32, patch: &BodyOptionsPatch) -> Option<BodyId> {
    let body = world.entities.create_detached(x, y, patch, &world.settings.defaults);
    if !world.entities.collisions_of(&body).is_empty() {
        return None;
    }
    Some(world.entities.insert(body))
}

pub(super) fn probe(world: &mut WorldCore, x: f32, y: f32, patch: &BodyOptionsPatch) -> Vec<BodyId> {
    world.entities.probe(x, y, patch, &world.settings.defaults)
}

pub(super) fn connect(world: &mut WorldCore, a: BodyId, b: BodyId) -> Result<(), EngineError> {
    world.entities.connect(a, b).map_err(|e| {
        engine_warn!("connect rejected: {}", e);
        e
    })
}

/// `Ok(false)` when the body was already dead.
pub(super) fn kill(world: &mut WorldCore, id: BodyId) -> Result<bool, EngineError> {
    if world.entities.get(id).is_none() {
        engine_warn!("kill rejected: unknown body {}", id);
        return Err(EngineError::UnknownBody { id });
    }
    Ok(world.entities.kill(id))
}

pub(super) fn clear(world: &mut WorldCore) {
    world.entities.clear();
    world.placement = None;
    world.render.circles.clear();
    world.render.colors.clear();
    world.render.links.clear();
}
