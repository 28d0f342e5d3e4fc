//! Core functionality shared by every layer: error type and logging macros.

#[macro_use]
pub mod utils;
pub mod error;

pub use error::EngineError;
