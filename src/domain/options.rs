//! Per-body options and their resolution against the default table.

use serde::{Deserialize, Serialize};

use super::toggle::{toggle, toggle_patch};

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_RADIUS: f32 = 10.0;
pub const DEFAULT_ROPE_TENSION: f32 = 20.0;
pub const DEFAULT_ROPE_MAX_TENSION: f32 = 50.0;
pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const DEFAULT_GRAVITY_MOMENTUM: f32 = 0.01;
pub const DEFAULT_BOUNCE_MULTIPLIER: f32 = 1.0 / 30.0;

/// Fully resolved options of one body.
///
/// `None` on the rope tensions or gravity means the feature is off for this
/// body. `rope_tension <= rope_max_tension` is expected but not enforced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyOptions {
    pub color: String,
    pub radius: f32,
    pub collision_enabled: bool,
    #[serde(with = "toggle")]
    pub rope_tension: Option<f32>,
    #[serde(with = "toggle")]
    pub rope_max_tension: Option<f32>,
    #[serde(with = "toggle")]
    pub gravity: Option<f32>,
    pub gravity_momentum: f32,
    pub bounce: bool,
    pub bounce_multiplier: f32,
    pub killer: bool,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            radius: DEFAULT_RADIUS,
            collision_enabled: true,
            rope_tension: Some(DEFAULT_ROPE_TENSION),
            rope_max_tension: Some(DEFAULT_ROPE_MAX_TENSION),
            gravity: Some(DEFAULT_GRAVITY),
            gravity_momentum: DEFAULT_GRAVITY_MOMENTUM,
            bounce: true,
            bounce_multiplier: DEFAULT_BOUNCE_MULTIPLIER,
            killer: false,
        }
    }
}

/// Caller-supplied partial options. Any `None` field is filled from the
/// defaults by [`resolve`]; `Some(None)` on a switchable field keeps the
/// feature disabled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyOptionsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_enabled: Option<bool>,
    #[serde(default, with = "toggle_patch", skip_serializing_if = "Option::is_none")]
    pub rope_tension: Option<Option<f32>>,
    #[serde(default, with = "toggle_patch", skip_serializing_if = "Option::is_none")]
    pub rope_max_tension: Option<Option<f32>>,
    #[serde(default, with = "toggle_patch", skip_serializing_if = "Option::is_none")]
    pub gravity: Option<Option<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity_momentum: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_multiplier: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub killer: Option<bool>,
}

impl BodyOptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_collision(mut self, enabled: bool) -> Self {
        self.collision_enabled = Some(enabled);
        self
    }

    /// `None` disables the soft rope constraint.
    pub fn with_rope_tension(mut self, tension: Option<f32>) -> Self {
        self.rope_tension = Some(tension);
        self
    }

    /// `None` disables the hard rope constraint.
    pub fn with_rope_max_tension(mut self, tension: Option<f32>) -> Self {
        self.rope_max_tension = Some(tension);
        self
    }

    /// `None` disables gravity.
    pub fn with_gravity(mut self, gravity: Option<f32>) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn with_gravity_momentum(mut self, momentum: f32) -> Self {
        self.gravity_momentum = Some(momentum);
        self
    }

    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = Some(bounce);
        self
    }

    pub fn with_bounce_multiplier(mut self, multiplier: f32) -> Self {
        self.bounce_multiplier = Some(multiplier);
        self
    }

    pub fn with_killer(mut self, killer: bool) -> Self {
        self.killer = Some(killer);
        self
    }

    /// Patch that disables both rope tiers and gravity: a static link as
    /// placed while a chain is still being drawn.
    pub fn static_link() -> Self {
        Self::new()
            .with_rope_tension(None)
            .with_rope_max_tension(None)
            .with_gravity(None)
    }
}

/// Fill every field the patch leaves out from `defaults`.
pub fn resolve(patch: &BodyOptionsPatch, defaults: &BodyOptions) -> BodyOptions {
    BodyOptions {
        color: patch.color.clone().unwrap_or_else(|| defaults.color.clone()),
        radius: patch.radius.unwrap_or(defaults.radius),
        collision_enabled: patch.collision_enabled.unwrap_or(defaults.collision_enabled),
        rope_tension: patch.rope_tension.unwrap_or(defaults.rope_tension),
        rope_max_tension: patch.rope_max_tension.unwrap_or(defaults.rope_max_tension),
        gravity: patch.gravity.unwrap_or(defaults.gravity),
        gravity_momentum: patch.gravity_momentum.unwrap_or(defaults.gravity_momentum),
        bounce: patch.bounce.unwrap_or(defaults.bounce),
        bounce_multiplier: patch.bounce_multiplier.unwrap_or(defaults.bounce_multiplier),
        killer: patch.killer.unwrap_or(defaults.killer),
    }
}
