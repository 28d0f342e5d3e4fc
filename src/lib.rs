//! Rope Sandbox Engine - rope-and-particle physics for a canvas sandbox in WASM
//!
//! Architecture:
//! - core/        - Errors and logging macros
//! - domain/      - Body options, defaults, tuning, settings bundle
//! - systems/     - Geometry, bodies, body set and per-tick physics
//! - simulation/  - World orchestration and the JS facade

// Logging macros must be declared before every module that uses them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Reached through `$crate` by the logging macros
#[doc(hidden)]
pub use web_sys;

// Thread pool initialization for the parallel render extraction
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Rope sandbox engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::{BodyOptions, BodyOptionsPatch, PhysicsTuning, SandboxSettings};
pub use simulation::{BodyRecord, PerfStats, World, WorldCore};
pub use systems::entity::{BodyId, Entity};
pub use systems::vector::Vec2;
