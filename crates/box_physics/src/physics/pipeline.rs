//! Per-frame physics pipeline
//!
//! The phase order is fixed: integrate every body, resolve bodies against
//! static geometry, resolve every unordered body pair, then re-verify support
//! for bodies still flagged grounded.
//!
//! A body with no contact in either resolution phase advances its grounded
//! hysteresis counter. Support re-verification only judges bodies that did
//! touch something this frame, so contact with a wall or a ceiling cannot keep
//! a body grounded over empty space.

use std::borrow::{Borrow, BorrowMut};

use crate::physics::body::{Body, StaticCollider};
use crate::physics::support::rests_on;
use crate::physics::world::PhysicsWorld;

/// Counts of what happened during one [`PhysicsWorld::step_frame`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Body/static overlaps that were resolved
    pub static_contacts: usize,
    /// Body pairs that were resolved
    pub pair_contacts: usize,
    /// Bodies whose grounded flag was cleared this frame
    pub grounded_lost: usize,
}

fn body_ref<B: Borrow<Body>>(slot: &B) -> &Body {
    <B as Borrow<Body>>::borrow(slot)
}

fn body_mut<B: BorrowMut<Body>>(slot: &mut B) -> &mut Body {
    <B as BorrowMut<Body>>::borrow_mut(slot)
}

impl PhysicsWorld {
    /// Run one full frame over `bodies` and `statics`
    ///
    /// `bodies` may be owned bodies or mutable references to bodies living
    /// elsewhere, e.g. inside host entities.
    pub fn step_frame<B>(&mut self, delta_time: f32, bodies: &mut [B], statics: &[StaticCollider]) -> FrameReport
    where
        B: BorrowMut<Body>,
    {
        let mut report = FrameReport::default();
        self.step(delta_time);

        // Phase 1: integrate
        for slot in bodies.iter_mut() {
            self.integrate(body_mut(slot));
        }

        // Phase 2: static geometry
        let mut in_contact: Vec<bool> = bodies
            .iter_mut()
            .map(|slot| self.resolve_static_phase(body_mut(slot), statics, &mut report))
            .collect();

        // Phase 3: body pairs
        for j in 1..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let b = body_mut(&mut tail[0]);
            for (i, slot) in head.iter_mut().enumerate() {
                let a = body_mut(slot);
                if Self::overlaps_bodies(a, b) {
                    self.resolve_body_pair(a, b);
                    report.pair_contacts += 1;
                    in_contact[i] = true;
                    in_contact[j] = true;
                } else if rests_on(&b.bounding_box(), &a.bounding_box()) {
                    Self::register_contact(b);
                    in_contact[j] = true;
                } else if rests_on(&a.bounding_box(), &b.bounding_box()) {
                    Self::register_contact(a);
                    in_contact[i] = true;
                }
            }
        }

        // Hysteresis only ticks once both contact phases have had their say
        for (slot, touched) in bodies.iter_mut().zip(&in_contact) {
            if !*touched && self.track_lost_contact(body_mut(slot)) {
                report.grounded_lost += 1;
            }
        }

        // Phase 4: support re-verification
        if self.verifies_support() {
            for i in 0..bodies.len() {
                let body = body_ref(&bodies[i]);
                // Bodies inside the hysteresis window are left to the counter
                if !body.is_grounded() || body.ungrounded_frames() > 0 {
                    continue;
                }
                let others = bodies
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, slot)| body_ref(slot));
                if !Self::has_support(body, statics, others) {
                    body_mut(&mut bodies[i]).clear_grounded();
                    report.grounded_lost += 1;
                }
            }
        }

        log::trace!(
            "Frame dt={:.4}: {} static contacts, {} pair contacts, {} supports lost",
            delta_time,
            report.static_contacts,
            report.pair_contacts,
            report.grounded_lost
        );

        report
    }

    /// Resolve one body against every static collider; returns whether it had any contact
    fn resolve_static_phase(&self, body: &mut Body, statics: &[StaticCollider], report: &mut FrameReport) -> bool {
        let mut touched = false;
        for collider in statics {
            if body.bounding_box().intersects(&collider.bounding_box()) {
                self.resolve_against_static(body, collider);
                report.static_contacts += 1;
                touched = true;
            } else if Self::touches_static(body, collider) {
                Self::register_contact(body);
                touched = true;
            }
        }
        touched
    }
}
