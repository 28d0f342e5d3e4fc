use std::collections::{HashSet, VecDeque};

use crate::core::EngineError;
use crate::systems::entity::BodyId;

use super::EntitySystem;

impl EntitySystem {
    /// Rope two bodies together. The link is recorded on both sides.
    ///
    /// Linking an already linked pair is a no-op.
    pub fn connect(&mut self, a: BodyId, b: BodyId) -> Result<(), EngineError> {
        if a == b {
            return Err(EngineError::SelfConnection { id: a });
        }
        if self.get(a).is_none() {
            return Err(EngineError::UnknownBody { id: a });
        }
        if self.get(b).is_none() {
            return Err(EngineError::UnknownBody { id: b });
        }

        if let Some(body) = self.get_mut(a) {
            if !body.is_connected_to(b) {
                body.connected.push(b);
            }
        }
        if let Some(body) = self.get_mut(b) {
            if !body.is_connected_to(a) {
                body.connected.push(a);
            }
        }
        Ok(())
    }

    /// Live bodies roped to `id`, in connection order.
    pub fn connections(&self, id: BodyId) -> Vec<BodyId> {
        let Some(body) = self.get(id) else {
            return Vec::new();
        };
        body.connected
            .iter()
            .copied()
            .filter(|&other| other != id && self.is_alive(other))
            .collect()
    }

    /// Drop dead, unknown and self entries from the connection list.
    pub fn prune_connections(&mut self, id: BodyId) {
        let live = self.connections(id);
        if let Some(body) = self.get_mut(id) {
            body.connected = live;
        }
    }

    /// Every live body reachable through ropes from `id`, excluding `id`,
    /// breadth-first in connection order.
    pub fn reachable(&self, id: BodyId) -> Vec<BodyId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut queue = VecDeque::new();

        seen.insert(id);
        queue.push_back(id);

        while let Some(current) = queue.pop_front() {
            for next in self.connections(current) {
                if seen.insert(next) {
                    out.push(next);
                    queue.push_back(next);
                }
            }
        }

        out
    }

    /// Every live rope as an `(a, b)` pair with `a < b`, each pair once.
    pub fn links(&self) -> Vec<(BodyId, BodyId)> {
        let mut out = Vec::new();
        for body in self.iter_alive() {
            for other in self.connections(body.id) {
                if body.id < other {
                    out.push((body.id, other));
                }
            }
        }
        out
    }
}
