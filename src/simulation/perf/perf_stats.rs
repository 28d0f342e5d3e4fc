use wasm_bindgen::prelude::*;

use crate::systems::physics::StepCounters;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) update_ms: f64,
    pub(super) bounds_ms: f64,
    pub(super) bodies_updated: u32,
    pub(super) rope_pulls: u32,
    pub(super) hard_rope_pulls: u32,
    pub(super) collisions_resolved: u32,
    pub(super) bounces: u32,
    pub(super) kills: u32,
    pub(super) clamps: u32,
    pub(super) live_bodies: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn absorb(&mut self, counters: &StepCounters) {
        self.bodies_updated = counters.bodies_updated;
        self.rope_pulls = counters.rope_pulls;
        self.hard_rope_pulls = counters.hard_rope_pulls;
        self.collisions_resolved = counters.collisions_resolved;
        self.bounces = counters.bounces;
        self.kills = counters.kills;
        self.clamps = counters.clamps;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn bounds_ms(&self) -> f64 { self.bounds_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_updated(&self) -> u32 { self.bodies_updated }
    #[wasm_bindgen(getter)]
    pub fn rope_pulls(&self) -> u32 { self.rope_pulls }
    #[wasm_bindgen(getter)]
    pub fn hard_rope_pulls(&self) -> u32 { self.hard_rope_pulls }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 { self.bounces }
    #[wasm_bindgen(getter)]
    pub fn kills(&self) -> u32 { self.kills }
    #[wasm_bindgen(getter)]
    pub fn clamps(&self) -> u32 { self.clamps }
    #[wasm_bindgen(getter)]
    pub fn live_bodies(&self) -> u32 { self.live_bodies }
}
