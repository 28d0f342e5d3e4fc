//! Settings bundle loaded from the host.
//!
//! ```json
//! {
//!   "defaults": { "radius": 12, "gravity": 0.3, "ropeTension": 15 },
//!   "tuning": { "bounceThreshold": 10 }
//! }
//! ```
//!
//! Every key is optional; missing option keys fall back to the built-in
//! default table, missing tuning keys to the built-in tuning.

use serde::{Deserialize, Serialize};

use super::options::{resolve, BodyOptions, BodyOptionsPatch};
use super::tuning::PhysicsTuning;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsRoot {
    #[serde(default)]
    defaults: BodyOptionsPatch,
    #[serde(default)]
    tuning: PhysicsTuning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SandboxSettings {
    pub defaults: BodyOptions,
    pub tuning: PhysicsTuning,
}

impl SandboxSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let root: SettingsRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(Self {
            defaults: resolve(&root.defaults, &BodyOptions::default()),
            tuning: root.tuning,
        })
    }

    pub fn to_json(&self) -> String {
        #[derive(Serialize)]
        struct Out<'a> {
            defaults: &'a BodyOptions,
            tuning: &'a PhysicsTuning,
        }
        serde_json::to_string(&Out { defaults: &self.defaults, tuning: &self.tuning })
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            defaults: BodyOptions::default(),
            tuning: PhysicsTuning::default(),
        }
    }
}
