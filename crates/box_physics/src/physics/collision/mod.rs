//! Collision detection primitives
//!
//! Stateless geometry used by the world to decide when and how to resolve
//! contacts between boxes.
//!
//! # Module Organization
//!
//! - [`aabb`] - Bounding boxes built from centre + full size, overlap tests
//! - [`class`] - Aspect-ratio classification of static colliders
//!
//! # Key Types
//!
//! - [`BoundingBox`] - Min/max corners of an axis-aligned box
//! - [`ColliderClass`] - `Floor`, `Wall` or `Generic`, chosen once per collider

pub mod aabb;
pub mod class;

// Re-export commonly used types
pub use aabb::{floor_penetration_depth, overlaps, BoundingBox};
pub use class::ColliderClass;
