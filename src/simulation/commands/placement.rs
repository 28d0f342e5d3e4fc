//! Press-drag-release chain building.
//!
//! While the pointer is held, each `place_link` drops a static link roped to
//! the previous one. Releasing brings the chain to life: free links get the
//! default rope tensions and gravity, anchored links stay where they are.
//! A plain click (release where the press happened, or nothing placed)
//! spawns one ordinary body instead.

use crate::domain::BodyOptionsPatch;
use crate::systems::entity::BodyId;
use crate::systems::vector::Vec2;

use super::WorldCore;

#[derive(Clone, Copy, Debug)]
struct PlacedLink {
    id: BodyId,
    anchored: bool,
}

#[derive(Debug)]
pub(super) struct Placement {
    press: Vec2,
    links: Vec<PlacedLink>,
}

pub(super) fn begin(world: &mut WorldCore, x: f32, y: f32) {
    world.placement = Some(Placement {
        press: Vec2::new(x, y),
        links: Vec::new(),
    });
}

pub(super) fn place_link(world: &mut WorldCore, x: f32, y: f32, anchored: bool) -> Option<BodyId> {
    let previous = world.placement.as_ref()?.links.last().map(|link| link.id);

    let id = world
        .entities
        .spawn(x, y, &BodyOptionsPatch::static_link(), &world.settings.defaults);
    if let Some(prev) = previous {
        if let Err(e) = world.entities.connect(id, prev) {
            engine_warn!("placement link not roped: {}", e);
        }
    }

    if let Some(placement) = world.placement.as_mut() {
        placement.links.push(PlacedLink { id, anchored });
    }
    Some(id)
}

pub(super) fn end(world: &mut WorldCore, x: f32, y: f32) -> Vec<BodyId> {
    let Some(placement) = world.placement.take() else {
        return Vec::new();
    };

    if placement.links.is_empty() || placement.press == Vec2::new(x, y) {
        let id = world
            .entities
            .spawn(x, y, &BodyOptionsPatch::new(), &world.settings.defaults);
        return vec![id];
    }

    let defaults = &world.settings.defaults;
    for link in placement.links.iter().filter(|link| !link.anchored) {
        if let Some(body) = world.entities.get_mut(link.id) {
            body.options.rope_tension = defaults.rope_tension;
            body.options.rope_max_tension = defaults.rope_max_tension;
            body.options.gravity = defaults.gravity;
        }
    }

    placement.links.iter().map(|link| link.id).collect()
}
