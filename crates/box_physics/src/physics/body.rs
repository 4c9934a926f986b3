//! Body and static collider data
//!
//! Bodies are plain state. The world mutates them every frame but never owns
//! them; hosts hand them in by reference.

use crate::error::{PhysicsError, PhysicsResult};
use crate::foundation::math::Vec3;
use crate::physics::collision::{BoundingBox, ColliderClass};

fn validate_extent(size: &Vec3) -> PhysicsResult<()> {
    if size.iter().all(|c| c.is_finite() && *c > 0.0) {
        Ok(())
    } else {
        Err(PhysicsError::InvalidExtent {
            x: size.x,
            y: size.y,
            z: size.z,
        })
    }
}

fn validate_mass(mass: f32) -> PhysicsResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}

/// A dynamic box body moving under gravity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Centre of the body's box in world units
    pub position: Vec3,

    /// Linear velocity in units per second
    pub velocity: Vec3,

    /// Per-frame acceleration; cleared after every integration step
    pub acceleration: Vec3,

    /// Whether gravity accumulates into the acceleration
    pub use_gravity: bool,

    collider_extent: Vec3,
    mass: f32,
    grounded: bool,
    ungrounded_frames: u32,
}

impl Body {
    /// Create a body at rest
    ///
    /// Fails if `mass` is not strictly positive or `extent` has a
    /// non-positive component.
    pub fn new(position: Vec3, mass: f32, extent: Vec3) -> PhysicsResult<Self> {
        validate_mass(mass)?;
        validate_extent(&extent)?;

        Ok(Self {
            position,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            use_gravity: true,
            collider_extent: extent,
            mass,
            grounded: false,
            ungrounded_frames: 0,
        })
    }

    /// Create a unit-mass unit cube at `position`
    pub fn unit_cube(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            use_gravity: true,
            collider_extent: Vec3::new(1.0, 1.0, 1.0),
            mass: 1.0,
            grounded: false,
            ungrounded_frames: 0,
        }
    }

    /// Builder-style initial velocity
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder-style gravity toggle
    #[must_use]
    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    /// Mass of the body (always > 0)
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Inverse mass used by impulse response
    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Replace the mass, rejecting non-positive values
    pub fn set_mass(&mut self, mass: f32) -> PhysicsResult<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Full size of the body's box
    pub fn collider_extent(&self) -> Vec3 {
        self.collider_extent
    }

    /// Resize the body's box (kept in sync with visual scale by the host)
    pub fn set_collider_extent(&mut self, extent: Vec3) -> PhysicsResult<()> {
        validate_extent(&extent)?;
        self.collider_extent = extent;
        Ok(())
    }

    /// Half of the body's box size
    pub fn half_extents(&self) -> Vec3 {
        self.collider_extent * 0.5
    }

    /// Current world-space box of the body
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_size(self.position, self.collider_extent)
    }

    /// Whether the body is considered resting on a surface
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Consecutive frames without contact while still flagged grounded
    pub fn ungrounded_frames(&self) -> u32 {
        self.ungrounded_frames
    }

    /// Record a supporting contact this frame
    pub fn mark_grounded(&mut self) {
        self.grounded = true;
        self.ungrounded_frames = 0;
    }

    /// Clear the grounded state and its hysteresis counter
    pub fn clear_grounded(&mut self) {
        self.grounded = false;
        self.ungrounded_frames = 0;
    }

    /// Reset the hysteresis counter without changing the grounded flag
    pub(crate) fn reset_contact_counter(&mut self) {
        self.ungrounded_frames = 0;
    }

    /// Count one more frame without contact and return the new count
    pub(crate) fn bump_contact_counter(&mut self) -> u32 {
        self.ungrounded_frames += 1;
        self.ungrounded_frames
    }
}

/// An immovable box used for world geometry
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCollider {
    /// Centre of the box; hosts may relocate it between frames
    pub position: Vec3,
    size: Vec3,
    class: ColliderClass,
}

impl StaticCollider {
    /// Create a static collider, classifying it by shape
    pub fn new(position: Vec3, size: Vec3) -> PhysicsResult<Self> {
        validate_extent(&size)?;
        Ok(Self {
            position,
            size,
            class: ColliderClass::from_size(&size),
        })
    }

    /// Static colliders are always static; kept for hosts mirroring a generic collider API
    pub const fn is_static(&self) -> bool {
        true
    }

    /// Full size of the collider
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Resize the collider and reclassify it
    pub fn set_size(&mut self, size: Vec3) -> PhysicsResult<()> {
        validate_extent(&size)?;
        self.size = size;
        self.class = ColliderClass::from_size(&size);
        Ok(())
    }

    /// Shape class chosen when the collider was built or resized
    pub fn class(&self) -> ColliderClass {
        self.class
    }

    /// Current world-space box of the collider
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_size(self.position, self.size)
    }
}
