//! Physics module for box bodies, collision detection and response
//!
//! Provides semi-implicit Euler integration, AABB collision detection,
//! static and body-to-body contact resolution, grounded-state tracking and
//! projectile launches.

pub mod body;
pub mod collision;
pub mod world;
pub mod static_contact;
pub mod pair_contact;
pub mod support;
pub mod projectile;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use body::{Body, StaticCollider};
pub use collision::{BoundingBox, ColliderClass};
pub use world::PhysicsWorld;
pub use static_contact::StaticContact;
pub use pair_contact::{PairContact, PairMember};
pub use projectile::{launch_velocity, trajectory_preview};
pub use pipeline::FrameReport;
