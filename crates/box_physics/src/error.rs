//! Error types for body construction
//!
//! Simulation operations themselves never fail; only building bodies and
//! colliders from caller-supplied values can be rejected.

use thiserror::Error;

/// Errors raised when constructing or reshaping physics data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be finite and strictly positive
    #[error("Invalid mass {0}: mass must be finite and greater than zero")]
    InvalidMass(f32),

    /// Every extent component must be finite and strictly positive
    #[error("Invalid extent ({x}, {y}, {z}): box sizes must be finite and greater than zero")]
    InvalidExtent {
        /// X size
        x: f32,
        /// Y size
        y: f32,
        /// Z size
        z: f32,
    },
}

/// Result alias for physics construction
pub type PhysicsResult<T> = Result<T, PhysicsError>;
