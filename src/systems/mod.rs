//! Systems: geometry, bodies, the body set and the per-tick physics.

pub mod entity;
pub mod entity_system;
pub mod physics;
pub mod vector;
