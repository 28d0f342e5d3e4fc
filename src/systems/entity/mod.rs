//! Entity - a simulated circular body
//!
//! The body holds its position as a `Vec2` value instead of *being* one;
//! `position()` is the positional capability every geometric query uses.

mod body;
mod ids;

pub use body::{BodyId, Entity};
pub use ids::{IdGenerator, MonotonicIds};
