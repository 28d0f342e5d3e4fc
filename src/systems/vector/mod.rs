//! Vec2 - planar point/vector used for every position in the sandbox
//!
//! Angles follow the canvas convention of the sandbox: measured clockwise
//! from the +y axis, so `direction(0.0)` points "down" the canvas.

mod vec2;

pub use vec2::Vec2;
