//! Projectile ("parabolic launch") helpers

use crate::foundation::math::{Vec3, UP};
use crate::physics::body::Body;
use crate::physics::world::PhysicsWorld;

/// Horizontal unit direction of `direction`, or zero if it has no horizontal part
fn horizontal_direction(direction: &Vec3) -> Vec3 {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    flat.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros)
}

/// Initial velocity for a launch at `angle_degrees` above the horizontal
pub fn launch_velocity(speed: f32, angle_degrees: f32, direction: &Vec3) -> Vec3 {
    let angle = angle_degrees.to_radians();
    horizontal_direction(direction) * (speed * angle.cos()) + UP * (speed * angle.sin())
}

impl PhysicsWorld {
    /// Replace the body's velocity with a projectile launch velocity
    ///
    /// The grounded flag is left for the next collision pass to settle.
    pub fn launch(body: &mut Body, speed: f32, angle_degrees: f32, direction: &Vec3) {
        body.velocity = launch_velocity(speed, angle_degrees, direction);
        log::debug!(
            "Launched body at {:.2} units/s, {:.1} degrees -> {:?}",
            speed,
            angle_degrees,
            body.velocity
        );
    }
}

/// Sample the closed-form launch parabola as `(horizontal, vertical)` offsets.
///
/// Sampling starts at `t = 0` and stops at `duration` or once the path drops
/// below the launch height.
pub fn trajectory_preview(
    speed: f32,
    angle_degrees: f32,
    gravity_magnitude: f32,
    duration: f32,
    sample_step: f32,
) -> Vec<(f32, f32)> {
    if sample_step <= 0.0 || duration < 0.0 {
        return Vec::new();
    }

    let angle = angle_degrees.to_radians();
    let horizontal_speed = speed * angle.cos();
    let vertical_speed = speed * angle.sin();

    let mut points = Vec::new();
    let mut sample = 0u32;
    loop {
        let t = sample as f32 * sample_step;
        if t > duration {
            break;
        }
        let height = vertical_speed * t - 0.5 * gravity_magnitude * t * t;
        if height < 0.0 {
            break;
        }
        points.push((horizontal_speed * t, height));
        sample += 1;
    }
    points
}
