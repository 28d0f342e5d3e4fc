//! World - the rope sandbox simulation
//!
//! `WorldCore` owns the body set, the active settings and the canvas size,
//! and runs the driver loop. Everything is plain Rust so it can be tested
//! natively; `facade::World` is the thin `#[wasm_bindgen]` wrapper the host
//! page talks to.
//!
//! The world only orchestrates: per-body physics lives in
//! `systems::physics`, cross-body queries in `systems::entity_system`.

use crate::core::EngineError;
use crate::domain::{BodyOptions, BodyOptionsPatch, PhysicsTuning, SandboxSettings};
use crate::systems::entity::{BodyId, Entity};
use crate::systems::entity_system::EntitySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/placement.rs"]
mod placement;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use snapshot::BodyRecord;

use perf_timer::{timed, PerfTimer};
use placement::Placement;

/// Flat buffers the host reads to draw a frame.
#[derive(Default)]
pub(crate) struct RenderBuffers {
    /// `[x, y, draw_radius]` per live body.
    pub(crate) circles: Vec<f32>,
    /// Packed pixel color per live body, same order as `circles`.
    pub(crate) colors: Vec<u32>,
    /// `[x1, y1, x2, y2]` per live rope.
    pub(crate) links: Vec<f32>,
}

/// The simulation world
pub struct WorldCore {
    entities: EntitySystem,
    settings: SandboxSettings,

    // Canvas
    width: u32,
    height: u32,

    // State
    frame: u64,
    placement: Option<Placement>,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world for a canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, SandboxSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: SandboxSettings) -> Self {
        init::create_world_core(width, height, settings)
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> u32 { self.entities.live_count() as u32 }

    pub fn entities(&self) -> &EntitySystem { &self.entities }

    pub fn body(&self, id: BodyId) -> Option<&Entity> { self.entities.get(id) }

    pub fn defaults(&self) -> &BodyOptions { &self.settings.defaults }

    pub fn tuning(&self) -> &PhysicsTuning { &self.settings.tuning }

    /// The host resizes the canvas with the window; bounds follow.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        settings::set_canvas_size(self, width, height);
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    pub fn spawn(&mut self, x: f32, y: f32, patch: &BodyOptionsPatch) -> BodyId {
        commands::spawn(self, x, y, patch)
    }

    /// Spawn unless the new body would overlap a live one.
    pub fn try_spawn(&mut self, x: f32, y: f32, patch: &BodyOptionsPatch) -> Option<BodyId> {
        commands::try_spawn(self, x, y, patch)
    }

    /// Live bodies a body with `patch` at `(x, y)` would overlap.
    pub fn probe(&mut self, x: f32, y: f32, patch: &BodyOptionsPatch) -> Vec<BodyId> {
        commands::probe(self, x, y, patch)
    }

    pub fn connect(&mut self, a: BodyId, b: BodyId) -> Result<(), EngineError> {
        commands::connect(self, a, b)
    }

    pub fn kill(&mut self, id: BodyId) -> Result<bool, EngineError> {
        commands::kill(self, id)
    }

    /// Remove every body. Ids keep counting up.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Queries ===

    pub fn collisions(&self, id: BodyId) -> Vec<BodyId> {
        self.entities.collisions(id)
    }

    pub fn connections(&self, id: BodyId) -> Vec<BodyId> {
        self.entities.connections(id)
    }

    pub fn reachable(&self, id: BodyId) -> Vec<BodyId> {
        self.entities.reachable(id)
    }

    // === Placement gesture ===

    pub fn begin_placement(&mut self, x: f32, y: f32) {
        placement::begin(self, x, y);
    }

    pub fn place_link(&mut self, x: f32, y: f32, anchored: bool) -> Option<BodyId> {
        placement::place_link(self, x, y, anchored)
    }

    pub fn end_placement(&mut self, x: f32, y: f32) -> Vec<BodyId> {
        placement::end(self, x, y)
    }

    pub fn is_placing(&self) -> bool {
        self.placement.is_some()
    }

    // === Step ===

    /// Advance the world by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Render ===

    /// Refill the render buffers from the live bodies; returns the body count.
    pub fn extract_render(&mut self) -> usize {
        render_extract::extract(self)
    }

    pub fn circles(&self) -> &[f32] { &self.render.circles }

    pub fn colors(&self) -> &[u32] { &self.render.colors }

    pub fn links(&self) -> &[f32] { &self.render.links }

    pub fn circles_ptr(&self) -> *const f32 { self.render.circles.as_ptr() }

    pub fn colors_ptr(&self) -> *const u32 { self.render.colors.as_ptr() }

    pub fn links_ptr(&self) -> *const f32 { self.render.links.as_ptr() }

    // === Snapshot ===

    pub fn to_json(&self) -> String {
        snapshot::to_json(self)
    }

    /// Replace the whole body set with a snapshot produced by [`Self::to_json`].
    pub fn load_json(&mut self, json: &str) -> Result<usize, EngineError> {
        snapshot::load_json(self, json)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
