use crate::domain::{BodyOptions, BodyOptionsPatch};
use crate::systems::entity::{BodyId, Entity};

use super::EntitySystem;

impl EntitySystem {
    /// Live bodies overlapping `id`, in creation order. Exhaustive O(n).
    pub fn collisions(&self, id: BodyId) -> Vec<BodyId> {
        match self.get(id) {
            Some(body) => self.collisions_of(body),
            None => Vec::new(),
        }
    }

    /// Live bodies overlapping `body`, which need not be stored (probe).
    pub fn collisions_of(&self, body: &Entity) -> Vec<BodyId> {
        self.iter_alive()
            .filter(|other| other.id != body.id && body.collides(other))
            .map(|other| other.id)
            .collect()
    }

    /// First live body overlapping `id` in creation order.
    pub fn first_collision(&self, id: BodyId) -> Option<BodyId> {
        let body = self.get(id)?;
        self.iter_alive()
            .find(|other| other.id != body.id && body.collides(other))
            .map(|other| other.id)
    }

    /// Collision probe for a pending placement at `(x, y)`.
    pub fn probe(&mut self, x: f32, y: f32, patch: &BodyOptionsPatch, defaults: &BodyOptions) -> Vec<BodyId> {
        let probe = self.create_detached(x, y, patch, defaults);
        self.collisions_of(&probe)
    }
}
