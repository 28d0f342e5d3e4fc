//! Serde helpers for options that can be switched off.
//!
//! The host writes a disabled feature as `false` (or `null`) and an enabled
//! one as a number, e.g. `"ropeTension": false` / `"ropeTension": 20`.

use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f32),
    Flag(bool),
}

/// `Option<f32>` written as a number or `false`.
pub mod toggle {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f32>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_f32(*v),
            None => s.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
        match Option::<Raw>::deserialize(d)? {
            Some(Raw::Number(v)) => Ok(Some(v)),
            Some(Raw::Flag(false)) | None => Ok(None),
            Some(Raw::Flag(true)) => Err(de::Error::custom(
                "expected a number or false, found true",
            )),
        }
    }
}

/// Three-state patch field: key absent (`None`), explicitly disabled
/// (`Some(None)`), or set (`Some(Some(v))`). Use with `#[serde(default)]`.
/// `true` means "use the default", same as leaving the key out.
pub mod toggle_patch {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Option<f32>>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(Some(v)) => s.serialize_f32(*v),
            Some(None) => s.serialize_bool(false),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<f32>>, D::Error> {
        match Option::<Raw>::deserialize(d)? {
            Some(Raw::Number(v)) => Ok(Some(Some(v))),
            Some(Raw::Flag(false)) | None => Ok(Some(None)),
            Some(Raw::Flag(true)) => Ok(None),
        }
    }
}
