use crate::systems::physics::{clamp_to_bounds, update_entity, StepCounters};

use super::{timed, PerfTimer, WorldCore};

/// One tick of the driver loop.
///
/// Bodies update sequentially in creation order over a snapshot of the ids
/// alive when the tick began; a body killed earlier in the tick is skipped.
/// Bounds are clamped after every body has moved.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = perf_on.then(PerfTimer::start);

    let mut counters = StepCounters::default();
    let ids = world.entities.alive_ids();
    let tuning = world.settings.tuning;

    let ((), update_ms) = timed(perf_on, || {
        for &id in &ids {
            let outcome = update_entity(&mut world.entities, id, &tuning, &mut counters);
            counters.record(outcome);
        }
    });

    let width = world.width as f32;
    let height = world.height as f32;
    let ((), bounds_ms) = timed(perf_on, || {
        for id in world.entities.alive_ids() {
            clamp_to_bounds(&mut world.entities, id, width, height, &tuning, &mut counters);
        }
    });

    world.frame += 1;

    if let Some(t0) = step_start {
        let stats = &mut world.perf_stats;
        stats.absorb(&counters);
        stats.update_ms = update_ms;
        stats.bounds_ms = bounds_ms;
        stats.live_bodies = world.entities.live_count() as u32;
        stats.step_ms = t0.elapsed_ms();
    }
}
