//! Host-side entities wrapping optional physics state
//!
//! An entity is either kinematic (transform only) or dynamic (transform plus a
//! simulated body). The choice is made at construction, so call sites match on
//! the kind instead of checking for missing physics data.

use crate::error::PhysicsResult;
use crate::foundation::math::{Transform, Vec3};
use crate::physics::{Body, FrameReport, PhysicsWorld, StaticCollider};

/// Whether a dynamic entity takes part in collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderState {
    /// The body collides with static geometry and other bodies
    Enabled,
    /// The body is integrated but passes through everything
    Disabled,
}

/// Physics role of an entity
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Moved only by the host
    Kinematic,
    /// Simulated every frame
    Dynamic {
        /// Simulated state
        body: Body,
        /// Whether the body collides
        collider: ColliderState,
    },
}

/// A renderable object with optional physics
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Transform mirrored for rendering
    pub transform: Transform,
    kind: EntityKind,
}

impl Entity {
    /// Create an entity that is never simulated
    pub fn kinematic(transform: Transform) -> Self {
        Self {
            transform,
            kind: EntityKind::Kinematic,
        }
    }

    /// Create a simulated entity whose collider matches its scale
    pub fn dynamic(transform: Transform, mass: f32) -> PhysicsResult<Self> {
        let body = Body::new(transform.position, mass, transform.scale)?;
        Ok(Self {
            transform,
            kind: EntityKind::Dynamic {
                body,
                collider: ColliderState::Enabled,
            },
        })
    }

    /// Physics role of this entity
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Simulated body, if the entity is dynamic
    pub fn body(&self) -> Option<&Body> {
        match &self.kind {
            EntityKind::Dynamic { body, .. } => Some(body),
            EntityKind::Kinematic => None,
        }
    }

    /// Mutable simulated body, if the entity is dynamic
    pub fn body_mut(&mut self) -> Option<&mut Body> {
        match &mut self.kind {
            EntityKind::Dynamic { body, .. } => Some(body),
            EntityKind::Kinematic => None,
        }
    }

    /// Body taking part in collision this frame, if any
    pub fn colliding_body_mut(&mut self) -> Option<&mut Body> {
        match &mut self.kind {
            EntityKind::Dynamic { body, collider: ColliderState::Enabled } => Some(body),
            _ => None,
        }
    }

    /// Turn collision on or off for a dynamic entity; no-op for kinematic ones
    pub fn set_collider(&mut self, state: ColliderState) {
        if let EntityKind::Dynamic { collider, .. } = &mut self.kind {
            *collider = state;
        }
    }

    /// Teleport the entity, keeping its body in sync
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
        if let Some(body) = self.body_mut() {
            body.position = position;
        }
    }

    /// Rescale the entity, resizing its body's box to match
    pub fn set_scale(&mut self, scale: Vec3) -> PhysicsResult<()> {
        if let Some(body) = self.body_mut() {
            body.set_collider_extent(scale)?;
        }
        self.transform.scale = scale;
        Ok(())
    }

    /// Copy the simulated position back into the transform
    pub fn sync_transform(&mut self) {
        if let EntityKind::Dynamic { body, .. } = &self.kind {
            self.transform.position = body.position;
        }
    }
}

impl PhysicsWorld {
    /// Run one frame over every colliding dynamic entity and sync their transforms
    ///
    /// Dynamic entities with collision disabled are integrated on their own and
    /// never touch static geometry or other bodies.
    pub fn step_entities(&mut self, delta_time: f32, entities: &mut [Entity], statics: &[StaticCollider]) -> FrameReport {
        let report = {
            let mut bodies: Vec<&mut Body> = entities
                .iter_mut()
                .filter_map(Entity::colliding_body_mut)
                .collect();
            self.step_frame(delta_time, &mut bodies, statics)
        };

        for entity in entities.iter_mut() {
            if let EntityKind::Dynamic { body, collider: ColliderState::Disabled } = &mut entity.kind {
                self.integrate(body);
            }
            entity.sync_transform();
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::world::CONTACT_EPSILON;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn floor() -> StaticCollider {
        StaticCollider::new(Vec3::zeros(), Vec3::new(20.0, 0.1, 20.0)).unwrap()
    }

    #[test]
    fn test_kinematic_entity_has_no_body() {
        let mut entity = Entity::kinematic(Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
        assert!(entity.body().is_none());
        assert!(entity.colliding_body_mut().is_none());

        entity.set_collider(ColliderState::Disabled);
        entity.sync_transform();
        assert_eq!(entity.transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_dynamic_entity_scale_drives_collider() {
        let mut entity = Entity::dynamic(Transform::from_position(Vec3::zeros()), 1.0).unwrap();
        assert_eq!(entity.body().unwrap().collider_extent(), Vec3::new(1.0, 1.0, 1.0));

        entity.set_scale(Vec3::new(2.0, 0.5, 2.0)).unwrap();
        assert_eq!(entity.body().unwrap().collider_extent(), Vec3::new(2.0, 0.5, 2.0));

        assert!(entity.set_scale(Vec3::new(0.0, 1.0, 1.0)).is_err());
        assert_eq!(entity.transform.scale, Vec3::new(2.0, 0.5, 2.0));
    }

    #[test]
    fn test_dynamic_entity_rejects_bad_mass() {
        assert!(Entity::dynamic(Transform::identity(), 0.0).is_err());
    }

    #[test]
    fn test_step_entities_syncs_transforms() {
        let mut world = PhysicsWorld::default();
        let statics = [floor()];
        let mut entities = vec![
            Entity::kinematic(Transform::from_position(Vec3::new(5.0, 5.0, 5.0))),
            Entity::dynamic(Transform::from_position(Vec3::new(0.0, 3.0, 0.0)), 1.0).unwrap(),
        ];

        for _ in 0..180 {
            world.step_entities(DT, &mut entities, &statics);
        }

        assert_eq!(entities[0].transform.position, Vec3::new(5.0, 5.0, 5.0));
        let dropped = &entities[1];
        assert!(dropped.body().unwrap().is_grounded());
        assert_relative_eq!(
            dropped.transform.position.y,
            0.05 + 0.5 + CONTACT_EPSILON,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_disabled_collider_falls_through_floor() {
        let mut world = PhysicsWorld::default();
        let statics = [floor()];
        let mut ghost = Entity::dynamic(Transform::from_position(Vec3::new(0.0, 1.0, 0.0)), 1.0).unwrap();
        ghost.set_collider(ColliderState::Disabled);
        let mut entities = vec![ghost];

        for _ in 0..120 {
            world.step_entities(DT, &mut entities, &statics);
        }

        assert!(entities[0].transform.position.y < -1.0);
        assert!(!entities[0].body().unwrap().is_grounded());
    }
}
