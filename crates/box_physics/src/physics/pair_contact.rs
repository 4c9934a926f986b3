//! Dynamic body-to-body resolution
//!
//! Two overlapping bodies are either a resting stack (one almost directly on
//! top of the other) or an elastic contact resolved with a single impulse
//! along the centre-to-centre normal followed by mass-weighted separation.

use crate::foundation::math::{Axis, Vec3, UP};
use crate::physics::body::Body;
use crate::physics::static_contact::overlap_depths;
use crate::physics::world::{PhysicsWorld, CONTACT_EPSILON};

/// Centre distances below this are treated as coincident bodies
const COINCIDENT_DISTANCE: f32 = 1e-6;

/// Which of the two bodies passed to [`PhysicsWorld::resolve_body_pair`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairMember {
    /// The first body argument
    First,
    /// The second body argument
    Second,
}

/// Outcome of a body pair resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairContact {
    /// One body was seated on top of the other; no impulse applied
    Stacked {
        /// The body that ended up on top
        upper: PairMember,
    },
    /// An impulse was exchanged and the bodies pushed apart along `axis`
    Impulse {
        /// Magnitude of the impulse along the contact normal
        impulse: f32,
        /// Axis of the positional correction
        axis: Axis,
    },
    /// The bodies were already moving apart; nothing changed
    Separating,
}

impl PhysicsWorld {
    /// Inclusive AABB test between two bodies' boxes
    pub fn overlaps_bodies(a: &Body, b: &Body) -> bool {
        a.bounding_box().intersects(&b.bounding_box())
    }

    /// Resolve two overlapping dynamic bodies
    ///
    /// The result depends only on geometry, velocities and masses, so
    /// swapping the arguments yields the mirrored outcome.
    pub fn resolve_body_pair(&self, a: &mut Body, b: &mut Body) -> PairContact {
        let box_a = a.bounding_box();
        let box_b = b.bounding_box();
        let offset = box_b.center() - box_a.center();
        let distance = offset.norm();
        let coincident = distance < COINCIDENT_DISTANCE;

        let normal = if coincident {
            Self::coincident_normal(a, b)
        } else {
            offset / distance
        };

        // Resting stack: vertical offset dominates both horizontal ones
        if offset.y.abs() > offset.x.abs() && offset.y.abs() > offset.z.abs() {
            let (upper, lower_top, member) = if offset.y > 0.0 {
                (b, box_a.max.y, PairMember::Second)
            } else {
                (a, box_b.max.y, PairMember::First)
            };
            self.land_on(upper, lower_top);
            log::trace!("Stacked contact, {:?} body on top", member);
            return PairContact::Stacked { upper: member };
        }

        let approach_speed = (b.velocity - a.velocity).dot(&normal);
        if approach_speed >= 0.0 && !coincident {
            return PairContact::Separating;
        }

        let impulse = if approach_speed < 0.0 {
            let inv_mass_a = a.inverse_mass();
            let inv_mass_b = b.inverse_mass();
            let impulse = -(1.0 + self.restitution()) * approach_speed / (inv_mass_a + inv_mass_b);

            b.velocity += normal * (impulse * inv_mass_b);
            a.velocity -= normal * (impulse * inv_mass_a);
            impulse
        } else {
            0.0
        };

        let axis = if coincident {
            // Equal overlap on every axis; follow the normal's dominant component
            let axis = Axis::of_min_component(&-normal.abs());
            Self::separate_pair(a, b, axis, &normal)
        } else {
            let overlap = overlap_depths(&box_a, &box_b, &offset);
            Self::separate_pair(a, b, Axis::of_min_component(&overlap), &offset)
        };
        log::trace!("Impulse {:.3} exchanged, separated along {:?}", impulse, axis);

        PairContact::Impulse { impulse, axis }
    }

    /// Contact normal for bodies sharing a centre, taken from their relative motion
    ///
    /// Points the way `a` moves relative to `b`, so swapping the bodies flips it.
    /// Bodies at relative rest fall back to [`UP`].
    fn coincident_normal(a: &Body, b: &Body) -> Vec3 {
        log::debug!("Coincident bodies, deriving the contact normal from relative velocity");
        (a.velocity - b.velocity)
            .try_normalize(f32::EPSILON)
            .unwrap_or(UP)
    }

    /// Push two bodies apart along `axis`, heavier body moving less
    ///
    /// `toward_b` decides which way `b` moves along the axis.
    fn separate_pair(a: &mut Body, b: &mut Body, axis: Axis, toward_b: &Vec3) -> Axis {
        let box_a = a.bounding_box();
        let box_b = b.bounding_box();
        let overlap = overlap_depths(&box_a, &box_b, &(box_b.center() - box_a.center()));
        let i = axis.index();

        let depth = overlap[i].max(0.0) + CONTACT_EPSILON;
        let total_mass = a.mass() + b.mass();
        let direction = if toward_b[i] >= 0.0 { 1.0 } else { -1.0 };

        a.position[i] -= direction * depth * (b.mass() / total_mass);
        b.position[i] += direction * depth * (a.mass() / total_mass);

        if axis.is_vertical() {
            if direction > 0.0 {
                b.mark_grounded();
            } else {
                a.mark_grounded();
            }
        }

        axis
    }
}
