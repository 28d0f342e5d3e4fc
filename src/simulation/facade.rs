use wasm_bindgen::prelude::*;

use crate::domain::BodyOptionsPatch;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Options arrive as the camelCase JSON the page builds from its UI,
/// e.g. `{"radius": 14, "gravity": false}`.
fn parse_patch(options: Option<String>) -> Result<BodyOptionsPatch, JsValue> {
    match options {
        Some(json) => BodyOptionsPatch::from_json(&json).map_err(|e| JsValue::from_str(&e)),
        None => Ok(BodyOptionsPatch::new()),
    }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() }

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.core.set_canvas_size(width, height);
    }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get_settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn spawn(&mut self, x: f32, y: f32, options: Option<String>) -> Result<u32, JsValue> {
        let patch = parse_patch(options)?;
        Ok(self.core.spawn(x, y, &patch))
    }

    /// Like `spawn`, but refuses (returns `undefined`) when the spot is taken.
    pub fn try_spawn(&mut self, x: f32, y: f32, options: Option<String>) -> Result<Option<u32>, JsValue> {
        let patch = parse_patch(options)?;
        Ok(self.core.try_spawn(x, y, &patch))
    }

    pub fn probe(&mut self, x: f32, y: f32, options: Option<String>) -> Result<Vec<u32>, JsValue> {
        let patch = parse_patch(options)?;
        Ok(self.core.probe(x, y, &patch))
    }

    pub fn connect(&mut self, a: u32, b: u32) -> Result<(), JsValue> {
        self.core
            .connect(a, b)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn kill(&mut self, id: u32) -> Result<bool, JsValue> {
        self.core.kill(id).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn collisions(&self, id: u32) -> Vec<u32> {
        self.core.collisions(id)
    }

    pub fn connections(&self, id: u32) -> Vec<u32> {
        self.core.connections(id)
    }

    pub fn reachable(&self, id: u32) -> Vec<u32> {
        self.core.reachable(id)
    }

    // === Placement gesture (mousedown / key / mouseup) ===

    pub fn begin_placement(&mut self, x: f32, y: f32) {
        self.core.begin_placement(x, y);
    }

    pub fn place_link(&mut self, x: f32, y: f32, anchored: bool) -> Option<u32> {
        self.core.place_link(x, y, anchored)
    }

    pub fn end_placement(&mut self, x: f32, y: f32) -> Vec<u32> {
        self.core.end_placement(x, y)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    // === Render buffers ===
    // Pointers stay valid until the next `extract_render` or `clear`.

    pub fn extract_render(&mut self) -> u32 {
        self.core.extract_render() as u32
    }

    pub fn circles_ptr(&self) -> *const f32 {
        self.core.circles_ptr()
    }

    pub fn circles_len(&self) -> u32 {
        self.core.circles().len() as u32
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> u32 {
        self.core.colors().len() as u32
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.core.links_ptr()
    }

    pub fn links_len(&self) -> u32 {
        self.core.links().len() as u32
    }

    // === Snapshot ===

    pub fn to_json(&self) -> String {
        self.core.to_json()
    }

    pub fn load_json(&mut self, json: String) -> Result<u32, JsValue> {
        self.core
            .load_json(&json)
            .map(|n| n as u32)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
