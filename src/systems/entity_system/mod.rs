//! EntitySystem - the live body set and the cross-body queries
//!
//! Owns every body ever created in the world (dead ones included, so ids stay
//! stable) and answers the questions a body's update step asks about the
//! others: who overlaps me, who am I roped to, which chain do I belong to.
//!
//! Iteration order is always creation order; "first collider found" in the
//! update step depends on it.

mod collision;
mod connections;
mod system;

pub use system::EntitySystem;
