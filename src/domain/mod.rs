//! Domain data: body options, default table, tuning, settings bundle.

pub mod color;
pub mod options;
pub mod settings;
pub mod toggle;
pub mod tuning;

pub use options::{resolve, BodyOptions, BodyOptionsPatch};
pub use settings::SandboxSettings;
pub use tuning::PhysicsTuning;
