//! Multi-frame scenario tests driving the full pipeline

mod drop_scenario;

use crate::foundation::math::Vec3;
use crate::physics::StaticCollider;

const DT: f32 = 1.0 / 60.0;

/// 20x20 floor slab, 0.1 thick, centred on the origin
fn floor() -> StaticCollider {
    StaticCollider::new(Vec3::zeros(), Vec3::new(20.0, 0.1, 20.0)).unwrap()
}

/// Centre height of a unit cube resting on [`floor`]
const RESTING_Y: f32 = 0.05 + 0.5 + crate::physics::world::CONTACT_EPSILON;
