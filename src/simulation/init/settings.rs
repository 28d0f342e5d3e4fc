use crate::core::EngineError;
use crate::domain::SandboxSettings;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_canvas_size(world: &mut WorldCore, width: u32, height: u32) {
    world.width = width;
    world.height = height;
}

/// Replace defaults and tuning. Bodies already in the world keep the options
/// they were created with.
pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> Result<(), EngineError> {
    let settings = SandboxSettings::from_json(json).map_err(|e| {
        engine_warn!("settings rejected: {}", e);
        EngineError::InvalidSettings(e)
    })?;
    world.settings = settings;
    engine_log!("settings loaded");
    Ok(())
}
