use std::collections::HashMap;

use crate::domain::{resolve, BodyOptions, BodyOptionsPatch};
use crate::systems::entity::{BodyId, Entity, IdGenerator, MonotonicIds};

/// Manages all bodies in the simulation
pub struct EntitySystem {
    bodies: Vec<Entity>,
    index: HashMap<BodyId, usize>,
    ids: Box<dyn IdGenerator>,
}

impl EntitySystem {
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(MonotonicIds::new()))
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            bodies: Vec::new(),
            index: HashMap::new(),
            ids,
        }
    }

    /// Create a body and add it to the live set.
    pub fn spawn(&mut self, x: f32, y: f32, patch: &BodyOptionsPatch, defaults: &BodyOptions) -> BodyId {
        let body = self.create_detached(x, y, patch, defaults);
        self.insert(body)
    }

    /// Create a body that is NOT part of the world: used to probe a pending
    /// placement for collisions before committing it.
    ///
    /// The detached body consumes an id, so ids stay unique even if it is
    /// later inserted.
    pub fn create_detached(&mut self, x: f32, y: f32, patch: &BodyOptionsPatch, defaults: &BodyOptions) -> Entity {
        let id = self.ids.next_id();
        Entity::new(id, x, y, resolve(patch, defaults))
    }

    /// Add an already built body (detached probe or loaded record).
    ///
    /// A body whose id is already stored replaces the stored one in place.
    pub fn insert(&mut self, body: Entity) -> BodyId {
        let id = body.id;
        self.ids.observe(id);
        match self.index.get(&id) {
            Some(&idx) => self.bodies[idx] = body,
            None => {
                self.index.insert(id, self.bodies.len());
                self.bodies.push(body);
            }
        }
        id
    }

    /// Remove every body. The id counter keeps going, so ids handed out
    /// before the clear never name a later body.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    pub fn get(&self, id: BodyId) -> Option<&Entity> {
        self.index.get(&id).map(|&idx| &self.bodies[idx])
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Entity> {
        match self.index.get(&id) {
            Some(&idx) => Some(&mut self.bodies[idx]),
            None => None,
        }
    }

    /// Live body lookup: dead or unknown ids are simply absent.
    pub fn get_alive(&self, id: BodyId) -> Option<&Entity> {
        self.get(id).filter(|b| b.alive)
    }

    pub fn is_alive(&self, id: BodyId) -> bool {
        self.get_alive(id).is_some()
    }

    /// Kill a body. Permanent; returns `false` if it was unknown or already dead.
    pub fn kill(&mut self, id: BodyId) -> bool {
        match self.get_mut(id) {
            Some(body) if body.alive => {
                body.alive = false;
                true
            }
            _ => false,
        }
    }

    /// Snapshot of live ids in creation order.
    pub fn alive_ids(&self) -> Vec<BodyId> {
        self.bodies.iter().filter(|b| b.alive).map(|b| b.id).collect()
    }

    /// Every stored body (dead included) in creation order.
    pub fn bodies(&self) -> &[Entity] {
        &self.bodies
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &Entity> {
        self.bodies.iter().filter(|b| b.alive)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn live_count(&self) -> usize {
        self.iter_alive().count()
    }
}

impl Default for EntitySystem {
    fn default() -> Self {
        Self::new()
    }
}
