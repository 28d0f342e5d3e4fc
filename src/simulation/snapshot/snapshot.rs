//! JSON save/load of the whole body set.
//!
//! Records keep ids, so ropes can be re-linked on load. Linking is best
//! effort: an id that has no record in the snapshot is dropped. Loading
//! never moves the id counter backwards.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::domain::BodyOptions;
use crate::systems::entity::{BodyId, Entity};
use crate::systems::vector::Vec2;

use super::WorldCore;

/// One body as written to a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub id: BodyId,
    pub x: f32,
    pub y: f32,
    pub options: BodyOptions,
    pub alive: bool,
    pub ticks: u32,
    #[serde(default)]
    pub fall_start: Option<Vec2>,
    #[serde(default)]
    pub fall_momentum: f32,
    #[serde(default)]
    pub bounce_velocity: f32,
    #[serde(default)]
    pub connected: Vec<BodyId>,
}

impl From<&Entity> for BodyRecord {
    fn from(body: &Entity) -> Self {
        Self {
            id: body.id,
            x: body.pos.x,
            y: body.pos.y,
            options: body.options.clone(),
            alive: body.alive,
            ticks: body.ticks,
            fall_start: body.fall_start,
            fall_momentum: body.fall_momentum,
            bounce_velocity: body.bounce_velocity,
            connected: body.connected.clone(),
        }
    }
}

impl BodyRecord {
    fn into_entity(self) -> Entity {
        let mut body = Entity::new(self.id, self.x, self.y, self.options);
        body.alive = self.alive;
        body.ticks = self.ticks;
        body.fall_start = self.fall_start;
        body.fall_momentum = self.fall_momentum;
        body.bounce_velocity = self.bounce_velocity;
        body
    }
}

pub(super) fn to_json(world: &WorldCore) -> String {
    let records: Vec<BodyRecord> = world.entities.bodies().iter().map(BodyRecord::from).collect();
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}

/// Returns the number of records loaded. On error the world is untouched.
pub(super) fn load_json(world: &mut WorldCore, json: &str) -> Result<usize, EngineError> {
    let records: Vec<BodyRecord> = serde_json::from_str(json).map_err(|e| {
        engine_warn!("snapshot rejected: {}", e);
        EngineError::InvalidSnapshot(e.to_string())
    })?;

    world.entities.clear();
    world.placement = None;

    let mut links = Vec::new();
    for mut record in records.iter().cloned() {
        for other in record.connected.drain(..) {
            links.push((record.id, other));
        }
        world.entities.insert(record.into_entity());
    }

    let mut dropped = 0usize;
    for (a, b) in links {
        if world.entities.connect(a, b).is_err() {
            dropped += 1;
        }
    }

    engine_log!(
        "snapshot loaded: {} bodies ({} live), {} dangling links dropped",
        records.len(),
        world.entities.live_count(),
        dropped
    );
    Ok(records.len())
}
