use crate::domain::SandboxSettings;
use crate::systems::entity_system::EntitySystem;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, settings: SandboxSettings) -> WorldCore {
    engine_log!("world created ({}x{})", width, height);
    WorldCore {
        entities: EntitySystem::new(),
        settings,
        width,
        height,
        frame: 0,
        placement: None,
        render: RenderBuffers {
            circles: Vec::with_capacity(3 * 256),
            colors: Vec::with_capacity(256),
            links: Vec::with_capacity(4 * 256),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
