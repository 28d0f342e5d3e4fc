#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::color::packed_color;
use crate::systems::entity::Entity;

use super::WorldCore;

/// Rebuild the frame buffers. Bodies are drawn at `pos` with half their
/// radius, ropes run position to position.
pub(super) fn extract(world: &mut WorldCore) -> usize {
    let render = &mut world.render;
    render.circles.clear();
    render.colors.clear();
    render.links.clear();

    let live: Vec<&Entity> = world.entities.iter_alive().collect();

    render.circles.reserve(live.len() * 3);
    for body in &live {
        render
            .circles
            .extend_from_slice(&[body.pos.x, body.pos.y, body.radius() / 2.0]);
    }

    // Hex parsing dominates extraction for large scenes
    #[cfg(feature = "parallel")]
    {
        live.par_iter()
            .map(|body| packed_color(body.color()))
            .collect_into_vec(&mut render.colors);
    }
    #[cfg(not(feature = "parallel"))]
    {
        render.colors.extend(live.iter().map(|body| packed_color(body.color())));
    }

    for (a, b) in world.entities.links() {
        let (Some(from), Some(to)) = (world.entities.get(a), world.entities.get(b)) else {
            continue;
        };
        render
            .links
            .extend_from_slice(&[from.pos.x, from.pos.y, to.pos.x, to.pos.y]);
    }

    live.len()
}
