//! # Box Physics
//!
//! A minimal real-time physics core for axis-aligned box bodies.
//!
//! ## Features
//!
//! - **Integration**: Semi-implicit Euler with gravity, damping and rest snapping
//! - **Collision**: AABB overlap tests against static geometry and other bodies
//! - **Response**: Floor/wall/generic static resolution, impulse-based pair response
//! - **Grounded State**: Per-body hysteresis plus support re-verification
//! - **Projectiles**: Parabolic launch helper and trajectory preview
//!
//! ## Quick Start
//!
//! ```rust
//! use box_physics::prelude::*;
//!
//! let mut world = PhysicsWorld::default();
//! let floor = StaticCollider::new(Vec3::zeros(), Vec3::new(20.0, 0.1, 20.0)).unwrap();
//! let mut bodies = vec![Body::unit_cube(Vec3::new(0.0, 5.0, 0.0))];
//!
//! for _ in 0..120 {
//!     world.step_frame(1.0 / 60.0, &mut bodies, std::slice::from_ref(&floor));
//! }
//!
//! assert!(bodies[0].is_grounded());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod entity;
pub mod error;

pub use error::{PhysicsError, PhysicsResult};

/// Common imports for physics users
pub mod prelude {
    pub use crate::{
        PhysicsError, PhysicsResult,
        foundation::math::{Axis, Transform, Vec3},
        config::{Config, ConfigError, PhysicsSettings},
        entity::{ColliderState, Entity, EntityKind},
        physics::{
            Body, StaticCollider, PhysicsWorld, FrameReport,
            BoundingBox, ColliderClass, StaticContact, PairContact, PairMember,
            launch_velocity, trajectory_preview,
        },
    };
}
