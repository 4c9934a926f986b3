//! Physics world: global tunables and the integration step
//!
//! The world owns only simulation parameters. Bodies and static geometry are
//! passed in by the host each frame, see [`PhysicsWorld::step_frame`].

use crate::config::PhysicsSettings;
use crate::foundation::math::Vec3;
use crate::physics::body::Body;

/// Gap left between a resolved body and the surface it was pushed out of
pub const CONTACT_EPSILON: f32 = 0.001;

/// Distance within which a body still counts as touching a surface
pub const CONTACT_TOLERANCE: f32 = 0.01;

/// Horizontal speed below which a grounded body stops creeping
pub const HORIZONTAL_REST_THRESHOLD: f32 = 0.01;

/// Default gravity (Y-up world)
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Default coefficient of restitution for body-to-body impulses
pub const DEFAULT_RESTITUTION: f32 = 0.2;

/// Default horizontal friction multiplier applied on resting contacts
pub const DEFAULT_FRICTION: f32 = 0.92;

/// Default per-step velocity damping
pub const DEFAULT_AIR_RESISTANCE: f32 = 0.98;

/// Default number of contact-free frames before `grounded` is cleared
pub const DEFAULT_GROUNDED_STABILITY: u32 = 3;

/// Default vertical speed below which a grounded body is snapped to rest
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 0.005;

const AIR_RESISTANCE_RANGE: (f32, f32) = (0.8, 1.0);

fn clamp_logged(name: &str, value: f32, min: f32, max: f32) -> f32 {
    let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
    if clamped != value {
        log::warn!("{} {} out of range [{}, {}], clamped to {}", name, value, min, max, clamped);
    }
    clamped
}

/// Global simulation parameters and per-frame physics operations
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsWorld {
    gravity: Vec3,
    delta_time: f32,
    grounded_stability: u32,
    restitution: f32,
    friction: f32,
    air_resistance: f32,
    velocity_threshold: f32,
    verify_support: bool,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl PhysicsWorld {
    /// Create a world with the given gravity and default tunables
    pub fn new(gravity: Vec3) -> Self {
        Self {
            gravity,
            delta_time: 0.0,
            grounded_stability: DEFAULT_GROUNDED_STABILITY,
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
            air_resistance: DEFAULT_AIR_RESISTANCE,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            verify_support: true,
        }
    }

    /// Create a world configured from loaded settings
    pub fn from_settings(settings: &PhysicsSettings) -> Self {
        let mut world = Self::default();
        world.apply_settings(settings);
        world
    }

    /// Push every world-level setting through its setter
    ///
    /// Launch parameters in the settings are not world state; hosts read them
    /// directly when calling [`PhysicsWorld::launch`].
    pub fn apply_settings(&mut self, settings: &PhysicsSettings) {
        self.set_gravity(settings.gravity());
        self.set_restitution(settings.restitution);
        self.set_friction(settings.friction);
        self.set_air_resistance(settings.air_resistance);
        self.set_grounded_stability(settings.grounded_stability);
        self.set_velocity_threshold(settings.velocity_threshold);
        self.verify_support = settings.verify_support;
    }

    // ====== Tunables ======

    /// Set gravity; non-finite vectors are ignored
    pub fn set_gravity(&mut self, gravity: Vec3) {
        if gravity.iter().all(|c| c.is_finite()) {
            self.gravity = gravity;
        } else {
            log::warn!("Ignoring non-finite gravity {:?}", gravity);
        }
    }

    /// Current gravity vector
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Set restitution, clamped to [0, 1]
    pub fn set_restitution(&mut self, restitution: f32) {
        self.restitution = clamp_logged("restitution", restitution, 0.0, 1.0);
    }

    /// Coefficient of restitution for body-to-body impulses
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Set friction, clamped to [0, 1]
    pub fn set_friction(&mut self, friction: f32) {
        self.friction = clamp_logged("friction", friction, 0.0, 1.0);
    }

    /// Horizontal velocity multiplier applied on resting contacts
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Set air resistance, clamped to [0.8, 1]
    pub fn set_air_resistance(&mut self, air_resistance: f32) {
        let (min, max) = AIR_RESISTANCE_RANGE;
        self.air_resistance = clamp_logged("air resistance", air_resistance, min, max);
    }

    /// Per-step velocity multiplier
    pub fn air_resistance(&self) -> f32 {
        self.air_resistance
    }

    /// Set the grounded hysteresis window (at least one frame)
    pub fn set_grounded_stability(&mut self, frames: u32) {
        if frames == 0 {
            log::warn!("grounded stability 0 out of range, clamped to 1");
        }
        self.grounded_stability = frames.max(1);
    }

    /// Consecutive contact-free frames required before `grounded` is cleared
    pub fn grounded_stability(&self) -> u32 {
        self.grounded_stability
    }

    /// Set the vertical rest threshold (non-negative)
    pub fn set_velocity_threshold(&mut self, threshold: f32) {
        self.velocity_threshold = clamp_logged("velocity threshold", threshold, 0.0, f32::MAX);
    }

    /// Vertical speed below which grounded bodies are snapped to rest
    pub fn velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }

    /// Enable or disable the support re-verification phase of the pipeline
    pub fn set_verify_support(&mut self, enabled: bool) {
        self.verify_support = enabled;
    }

    /// Whether the pipeline re-verifies support for grounded bodies
    pub fn verifies_support(&self) -> bool {
        self.verify_support
    }

    // ====== Integration ======

    /// Record this frame's timestep; shared by every operation until the next call
    pub fn step(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
    }

    /// Timestep recorded by the last [`PhysicsWorld::step`]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Accumulate a force into the body's acceleration for this frame
    pub fn apply_force(body: &mut Body, force: Vec3) {
        body.acceleration += force * body.inverse_mass();
    }

    /// Advance one body by the current timestep (semi-implicit Euler)
    pub fn integrate(&self, body: &mut Body) {
        let dt = self.delta_time;
        let was_grounded = body.is_grounded();

        if body.use_gravity && !was_grounded {
            body.acceleration += self.gravity * body.inverse_mass();
        }

        body.velocity += body.acceleration * dt;
        body.velocity *= self.air_resistance;

        if was_grounded {
            if body.velocity.y.abs() < self.velocity_threshold {
                body.velocity.y = 0.0;
            }
            if body.velocity.x.abs() < HORIZONTAL_REST_THRESHOLD {
                body.velocity.x = 0.0;
            }
            if body.velocity.z.abs() < HORIZONTAL_REST_THRESHOLD {
                body.velocity.z = 0.0;
            }
        }

        body.position += body.velocity * dt;
        body.acceleration = Vec3::zeros();
    }
}
