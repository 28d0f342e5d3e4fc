//! Per-tick body update
//!
//! One call of [`update_entity`] advances one body by one tick. The steps run
//! in a fixed order and the first constraint that fires ends the update:
//!
//! 1. prune dead/self connections
//! 2. kill resolution (killers remove non-killers on contact)
//! 3. hard rope (`rope_max_tension`)
//! 4. soft rope (`rope_tension`)
//! 5. collision push
//! 6. bounce decay or gravity integration
//!
//! Updates are not double-buffered: a body sees the positions other bodies
//! already reached earlier in the same tick.

mod bounce;
mod bounds;
mod collision;
mod integrate;
mod kill;
mod rope;
mod types;
mod update;

pub use bounce::bounce;
pub use bounds::{clamp_to_bounds, BoundsHit};
pub use collision::update_collisions;
pub use integrate::integrate;
pub use kill::resolve_kills;
pub use rope::{update_max_rope_tension, update_rope_tension};
pub use types::{StepCounters, UpdateOutcome};
pub use update::update_entity;
