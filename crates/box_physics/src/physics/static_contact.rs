//! Body versus static collider resolution
//!
//! A collider's [`ColliderClass`] picks the separation axis: floors push up when
//! the body is above them, walls push out along the shallower horizontal axis
//! while the body is within their height, and everything else falls back to
//! the axis of least overlap.

use crate::foundation::math::{Axis, Vec3};
use crate::physics::body::{Body, StaticCollider};
use crate::physics::collision::{BoundingBox, ColliderClass};
use crate::physics::world::{PhysicsWorld, CONTACT_EPSILON, CONTACT_TOLERANCE};

/// Which face of the static collider the body was pushed against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticContact {
    /// Body rests on top of the collider
    Floor,
    /// Body hit the underside of the collider
    Ceiling,
    /// Body was pushed out sideways along the given horizontal axis
    Side(Axis),
}

/// Per-axis overlap depth of two boxes given their centre offset
pub(crate) fn overlap_depths(a: &BoundingBox, b: &BoundingBox, offset: &Vec3) -> Vec3 {
    (a.half_extents() + b.half_extents()) - offset.abs()
}

fn separation_axis(class: ColliderClass, body: &BoundingBox, collider: &BoundingBox) -> Axis {
    let offset = body.center() - collider.center();

    match class {
        ColliderClass::Floor if offset.y > 0.0 => Axis::Y,
        ColliderClass::Wall { .. }
            if body.center().y >= collider.min.y && body.center().y <= collider.max.y =>
        {
            // Face or end cap, whichever is shallower; never up or down
            let depths = overlap_depths(body, collider, &offset);
            if depths.z < depths.x { Axis::Z } else { Axis::X }
        }
        _ => Axis::of_min_component(&overlap_depths(body, collider, &offset)),
    }
}

impl PhysicsWorld {
    /// Whether the body touches the collider, allowing a small gap
    pub fn touches_static(body: &Body, collider: &StaticCollider) -> bool {
        body.bounding_box()
            .expanded(CONTACT_TOLERANCE)
            .intersects(&collider.bounding_box())
    }

    /// Push a body out of a static collider it overlaps
    ///
    /// Only the body is mutated. Any contact resets the body's grounded
    /// hysteresis counter.
    pub fn resolve_against_static(&self, body: &mut Body, collider: &StaticCollider) -> StaticContact {
        let body_box = body.bounding_box();
        let collider_box = collider.bounding_box();
        let half = body.half_extents();

        body.reset_contact_counter();

        let axis = separation_axis(collider.class(), &body_box, &collider_box);
        let body_above = body_box.center().y > collider_box.center().y;

        match axis {
            Axis::Y if body_above => {
                self.land_on(body, collider_box.max.y);
                log::trace!("Floor contact at y={:.3}", body.position.y);
                StaticContact::Floor
            }
            Axis::Y => {
                body.position.y = collider_box.min.y - half.y - CONTACT_EPSILON;
                if body.velocity.y > 0.0 {
                    body.velocity.y = 0.0;
                }
                log::trace!("Ceiling contact at y={:.3}", body.position.y);
                StaticContact::Ceiling
            }
            horizontal => {
                let i = horizontal.index();
                let offset = body_box.center()[i] - collider_box.center()[i];
                body.position[i] = if offset >= 0.0 {
                    collider_box.max[i] + half[i] + CONTACT_EPSILON
                } else {
                    collider_box.min[i] - half[i] - CONTACT_EPSILON
                };
                body.velocity[i] = 0.0;
                log::trace!("Side contact along {:?}", horizontal);
                StaticContact::Side(horizontal)
            }
        }
    }

    /// Seat a body on a surface whose top face is at `surface_top`
    pub(crate) fn land_on(&self, body: &mut Body, surface_top: f32) {
        body.position.y = surface_top + body.half_extents().y + CONTACT_EPSILON;
        if body.velocity.y < 0.0 {
            body.velocity.y = 0.0;
        }
        if !body.is_grounded() {
            log::debug!("Body grounded at y={:.3}", body.position.y);
        }
        body.mark_grounded();
        body.velocity.x *= self.friction();
        body.velocity.z *= self.friction();
    }

    /// Record a touching contact that needed no positional correction
    pub fn register_contact(body: &mut Body) {
        body.reset_contact_counter();
    }

    /// Advance the grounded hysteresis for a body with no contact this frame
    ///
    /// Returns `true` when this call cleared the grounded flag.
    pub fn track_lost_contact(&self, body: &mut Body) -> bool {
        if !body.is_grounded() {
            return false;
        }

        let frames = body.bump_contact_counter();
        if frames >= self.grounded_stability() {
            log::debug!("Body lost ground contact for {} frames, clearing grounded", frames);
            body.clear_grounded();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn floor() -> StaticCollider {
        StaticCollider::new(Vec3::zeros(), Vec3::new(20.0, 0.1, 20.0)).unwrap()
    }

    #[test]
    fn test_floor_contact_seats_body_on_top() {
        let world = PhysicsWorld::default();
        let floor = floor();
        let mut body = Body::unit_cube(Vec3::new(0.0, 0.45, 0.0))
            .with_velocity(Vec3::new(1.0, -3.0, -0.5));

        let contact = world.resolve_against_static(&mut body, &floor);

        assert_eq!(contact, StaticContact::Floor);
        assert!(body.is_grounded());
        assert_relative_eq!(
            body.bounding_box().min.y,
            floor.bounding_box().max.y + CONTACT_EPSILON,
            epsilon = 1e-6
        );
        assert_eq!(body.velocity.y, 0.0);
        assert_relative_eq!(body.velocity.x, 0.92);
        assert_relative_eq!(body.velocity.z, -0.5 * 0.92);
    }

    #[test]
    fn test_floor_contact_keeps_upward_velocity() {
        let world = PhysicsWorld::default();
        let mut body = Body::unit_cube(Vec3::new(0.0, 0.5, 0.0))
            .with_velocity(Vec3::new(0.0, 2.0, 0.0));

        world.resolve_against_static(&mut body, &floor());

        assert_relative_eq!(body.velocity.y, 2.0);
    }

    #[test]
    fn test_thin_floor_wins_over_shallow_side_overlap() {
        let world = PhysicsWorld::default();
        let floor = floor();
        // Overlaps the floor's edge by 0.05 in X but 0.15 in Y
        let mut body = Body::unit_cube(Vec3::new(10.45, 0.4, 0.0));

        let contact = world.resolve_against_static(&mut body, &floor);

        assert_eq!(contact, StaticContact::Floor);
        assert_relative_eq!(body.position.x, 10.45);
        assert_relative_eq!(body.position.y, 0.05 + 0.5 + CONTACT_EPSILON, epsilon = 1e-6);
    }

    #[test]
    fn test_generic_block_uses_least_overlap_axis() {
        let world = PhysicsWorld::default();
        let block = StaticCollider::new(Vec3::new(0.0, -3.95, 0.0), Vec3::new(20.0, 8.0, 20.0)).unwrap();
        assert_eq!(block.class(), ColliderClass::Generic);

        let mut body = Body::unit_cube(Vec3::new(10.45, 0.4, 0.0))
            .with_velocity(Vec3::new(-1.0, -1.0, 0.0));

        let contact = world.resolve_against_static(&mut body, &block);

        assert_eq!(contact, StaticContact::Side(Axis::X));
        assert_relative_eq!(body.position.x, 10.0 + 0.5 + CONTACT_EPSILON);
        assert_eq!(body.velocity.x, 0.0);
        assert_relative_eq!(body.velocity.y, -1.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_ceiling_contact_stops_upward_motion() {
        let world = PhysicsWorld::default();
        let roof = StaticCollider::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(2.0, 1.0, 2.0)).unwrap();
        let mut body = Body::unit_cube(Vec3::new(0.0, 2.1, 0.0))
            .with_velocity(Vec3::new(0.0, 4.0, 0.0));

        let contact = world.resolve_against_static(&mut body, &roof);

        assert_eq!(contact, StaticContact::Ceiling);
        assert_relative_eq!(body.position.y, 2.5 - 0.5 - CONTACT_EPSILON, epsilon = 1e-6);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_wall_pushes_out_along_its_normal() {
        let world = PhysicsWorld::default();
        let wall = StaticCollider::new(Vec3::new(2.0, 2.5, 0.0), Vec3::new(0.2, 5.0, 20.0)).unwrap();
        let mut body = Body::unit_cube(Vec3::new(1.5, 1.0, 0.0))
            .with_velocity(Vec3::new(3.0, 0.0, 1.0));

        let contact = world.resolve_against_static(&mut body, &wall);

        assert_eq!(contact, StaticContact::Side(Axis::X));
        assert_relative_eq!(body.position.x, 1.9 - 0.5 - CONTACT_EPSILON, epsilon = 1e-6);
        assert_eq!(body.velocity.x, 0.0);
        assert_relative_eq!(body.velocity.z, 1.0);
    }

    #[test]
    fn test_wall_end_cap_pushes_along_its_length() {
        let world = PhysicsWorld::default();
        let wall = StaticCollider::new(Vec3::new(2.0, 2.5, 0.0), Vec3::new(0.2, 5.0, 20.0)).unwrap();
        // Clips the far end: 0.1 deep along Z, 0.6 along X
        let mut body = Body::unit_cube(Vec3::new(2.0, 1.0, 10.4))
            .with_velocity(Vec3::new(0.5, 0.0, -2.0));

        let contact = world.resolve_against_static(&mut body, &wall);

        assert_eq!(contact, StaticContact::Side(Axis::Z));
        assert_relative_eq!(body.position.x, 2.0);
        assert_relative_eq!(body.position.z, 10.0 + 0.5 + CONTACT_EPSILON, epsilon = 1e-5);
        assert_eq!(body.velocity.z, 0.0);
        assert_relative_eq!(body.velocity.x, 0.5);
    }

    #[test]
    fn test_landing_uses_friction_tunable() {
        let mut world = PhysicsWorld::default();
        world.set_friction(0.5);
        let mut body = Body::unit_cube(Vec3::new(0.0, 0.5, 0.0))
            .with_velocity(Vec3::new(2.0, -1.0, -4.0));

        world.resolve_against_static(&mut body, &floor());

        assert_relative_eq!(body.velocity.x, 1.0);
        assert_relative_eq!(body.velocity.z, -2.0);
    }

    #[test]
    fn test_touching_counts_as_contact() {
        let floor = floor();
        let resting = Body::unit_cube(Vec3::new(0.0, 0.05 + 0.5 + CONTACT_EPSILON, 0.0));
        let hovering = Body::unit_cube(Vec3::new(0.0, 1.0, 0.0));

        assert!(PhysicsWorld::touches_static(&resting, &floor));
        assert!(!PhysicsWorld::touches_static(&hovering, &floor));
    }

    #[test]
    fn test_lost_contact_clears_after_stability_window() {
        let world = PhysicsWorld::default();
        let mut body = Body::unit_cube(Vec3::zeros());

        assert!(!world.track_lost_contact(&mut body));

        body.mark_grounded();
        assert!(!world.track_lost_contact(&mut body));
        assert!(!world.track_lost_contact(&mut body));
        assert!(body.is_grounded());
        assert!(world.track_lost_contact(&mut body));
        assert!(!body.is_grounded());
    }
}
