use super::{floor, DT, RESTING_Y};
use crate::foundation::math::Vec3;
use crate::physics::world::CONTACT_EPSILON;
use crate::physics::{Body, PhysicsWorld};
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_dropped_body_lands_and_settles() {
    let mut world = PhysicsWorld::default();
    let statics = [floor()];
    let mut bodies = vec![Body::unit_cube(Vec3::new(0.0, 5.0, 0.0))];

    let mut landed_at = None;
    for frame in 0..180 {
        world.step_frame(DT, &mut bodies, &statics);
        if landed_at.is_none() && bodies[0].is_grounded() {
            landed_at = Some(frame);
        }
    }

    // About 1.2s of damped free fall
    let landed_at = landed_at.expect("body never landed");
    assert!((50..100).contains(&landed_at), "landed at frame {}", landed_at);

    let body = &bodies[0];
    assert!(body.is_grounded());
    assert_abs_diff_eq!(body.velocity, Vec3::zeros(), epsilon = 1e-6);
    assert_relative_eq!(body.bounding_box().min.y, 0.05 + CONTACT_EPSILON, epsilon = 1e-5);
    assert_relative_eq!(body.position.y, RESTING_Y, epsilon = 1e-5);
}

#[test]
fn test_resting_body_stays_put() {
    let mut world = PhysicsWorld::default();
    let statics = [floor()];
    let mut bodies = vec![Body::unit_cube(Vec3::new(0.0, 2.0, 0.0))];

    for _ in 0..120 {
        world.step_frame(DT, &mut bodies, &statics);
    }
    let settled = bodies[0].position;

    for _ in 0..300 {
        let report = world.step_frame(DT, &mut bodies, &statics);
        assert_eq!(report.grounded_lost, 0);
        assert!(bodies[0].is_grounded());
    }

    assert_eq!(bodies[0].position, settled);
}

#[test]
fn test_sliding_body_loses_support_past_the_edge() {
    let mut world = PhysicsWorld::default();
    let statics = [floor()];
    let mut body = Body::unit_cube(Vec3::new(9.0, RESTING_Y, 0.0));
    body.mark_grounded();
    let mut bodies = vec![body];

    // Host pushes the body sideways off the slab; it hovers for the hysteresis window
    bodies[0].position.x = 11.0;
    let window = world.grounded_stability();
    let mut lost = 0;
    for frame in 1..=window {
        lost += world.step_frame(DT, &mut bodies, &statics).grounded_lost;
        assert_eq!(bodies[0].is_grounded(), frame < window);
    }
    assert_eq!(lost, 1);
    assert_relative_eq!(bodies[0].position.y, RESTING_Y);

    for _ in 0..60 {
        world.step_frame(DT, &mut bodies, &statics);
    }
    assert!(bodies[0].position.y < 0.0);
}

#[test]
fn test_body_pushed_into_wall_is_stopped() {
    let mut world = PhysicsWorld::default();
    let wall = crate::physics::StaticCollider::new(
        Vec3::new(3.0, 2.5, 0.0),
        Vec3::new(0.2, 5.0, 20.0),
    )
    .unwrap();
    let statics = [floor(), wall];

    let mut body = Body::unit_cube(Vec3::new(0.0, RESTING_Y, 0.0)).with_velocity(Vec3::new(8.0, 0.0, 0.0));
    body.mark_grounded();
    let mut bodies = vec![body];

    for _ in 0..120 {
        world.step_frame(DT, &mut bodies, &statics);
    }

    let body = &bodies[0];
    assert!(body.bounding_box().max.x < 2.9);
    assert_eq!(body.velocity.x, 0.0);
    assert!(body.is_grounded());
}
