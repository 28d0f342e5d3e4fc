//! Numeric constants of the per-tick update.
//!
//! The defaults reproduce the sandbox's hand-tuned feel; a settings bundle
//! may override any of them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsTuning {
    /// A bounce is in progress while `bounce_velocity` is above this.
    pub bounce_threshold: f32,
    /// Fall distance is divided by this to get the rebound velocity.
    pub bounce_divisor: f32,
    /// Hard rope correction is `(distance - rope_tension) / hard_rope_divisor`.
    pub hard_rope_divisor: f32,
    /// Momentum lost on any rope pull.
    pub rope_momentum_decay: f32,
    /// Momentum lost on a collision push.
    pub collision_momentum_decay: f32,
    /// Length of the push away from a collider.
    pub collision_push: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            bounce_threshold: 15.0,
            bounce_divisor: 3.0,
            hard_rope_divisor: 10.0,
            rope_momentum_decay: 0.02,
            collision_momentum_decay: 0.1,
            collision_push: 2.0,
        }
    }
}
