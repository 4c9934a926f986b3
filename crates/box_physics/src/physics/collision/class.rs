//! Aspect-ratio classification of static colliders

use crate::foundation::math::{Axis, Vec3};

/// A dimension counts as "thin" below this fraction of both other dimensions
pub const THIN_RATIO: f32 = 0.25;

/// How a static collider resolves contacts, decided from its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderClass {
    /// Much thinner vertically than horizontally; behaves like a ground plane
    Floor,
    /// Thin along one horizontal axis; `normal` is that axis
    Wall {
        /// Axis the wall faces along
        normal: Axis,
    },
    /// Anything else; resolved along the axis of least overlap
    Generic,
}

impl ColliderClass {
    /// Classify a collider from its full size
    pub fn from_size(size: &Vec3) -> Self {
        let is_thin = |axis: Axis| {
            let thickness = size[axis.index()];
            Axis::ALL
                .iter()
                .filter(|other| **other != axis)
                .all(|other| thickness < THIN_RATIO * size[other.index()])
        };

        if is_thin(Axis::Y) {
            ColliderClass::Floor
        } else if is_thin(Axis::X) {
            ColliderClass::Wall { normal: Axis::X }
        } else if is_thin(Axis::Z) {
            ColliderClass::Wall { normal: Axis::Z }
        } else {
            ColliderClass::Generic
        }
    }
}
