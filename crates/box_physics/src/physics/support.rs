//! Support re-verification for grounded bodies
//!
//! A support is any box beneath the body whose footprint overlaps the body's
//! and whose top lies between the body's mid-height and
//! [`CONTACT_TOLERANCE`] below the body's bottom face.

use crate::physics::body::{Body, StaticCollider};
use crate::physics::collision::BoundingBox;
use crate::physics::world::{PhysicsWorld, CONTACT_TOLERANCE};

/// Whether `support` holds up `body` from directly beneath
pub(crate) fn rests_on(body: &BoundingBox, support: &BoundingBox) -> bool {
    if !body.overlaps_horizontally(support) || support.center().y >= body.center().y {
        return false;
    }

    let gap = body.min.y - support.max.y;
    gap >= -body.half_extents().y && gap <= CONTACT_TOLERANCE
}

impl PhysicsWorld {
    /// Whether any static collider or other body supports `body` right now
    pub fn has_support<'a, I>(body: &Body, statics: &[StaticCollider], others: I) -> bool
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let body_box = body.bounding_box();

        statics
            .iter()
            .any(|collider| rests_on(&body_box, &collider.bounding_box()))
            || others
                .into_iter()
                .any(|other| rests_on(&body_box, &other.bounding_box()))
    }

    /// Clear `grounded` on a body that no longer has anything beneath it
    ///
    /// Returns whether the body is still grounded afterwards.
    pub fn verify_support(&self, body: &mut Body, statics: &[StaticCollider], others: &[Body]) -> bool {
        if !body.is_grounded() {
            return false;
        }

        if Self::has_support(body, statics, others) {
            true
        } else {
            log::debug!("Grounded body at {:?} has no support, clearing grounded", body.position);
            body.clear_grounded();
            false
        }
    }
}
