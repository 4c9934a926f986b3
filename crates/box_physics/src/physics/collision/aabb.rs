//! Axis-aligned bounding boxes and overlap tests

use crate::foundation::math::Vec3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a new box from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build the box around `center` with full size `size` (corners are `center ∓ size/2`)
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-size of the box
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this box overlaps another on all three axes (touching counts)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Grow the box by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Self {
        let margin = Vec3::repeat(margin);
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Whether the boxes' footprints overlap on the horizontal (X/Z) plane
    pub fn overlaps_horizontally(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

/// Inclusive AABB test between two boxes
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.intersects(b)
}

/// How far a body box has sunk into a floor box below it.
///
/// Zero unless the boxes overlap and the body's centre lies above the floor's.
pub fn floor_penetration_depth(body: &BoundingBox, floor: &BoundingBox) -> f32 {
    if !body.intersects(floor) || body.center().y <= floor.center().y {
        return 0.0;
    }
    (floor.max.y - body.min.y).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box_at(x: f32, y: f32, z: f32) -> BoundingBox {
        BoundingBox::from_center_size(Vec3::new(x, y, z), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_box_from_center_size() {
        let bb = BoundingBox::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));

        assert_relative_eq!(bb.min, Vec3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(bb.max, Vec3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(bb.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(bb.half_extents(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_overlap_requires_all_axes() {
        let a = unit_box_at(0.0, 0.0, 0.0);

        assert!(overlaps(&a, &unit_box_at(0.5, 0.5, 0.5)));
        assert!(!overlaps(&a, &unit_box_at(0.5, 0.5, 1.5)));
        assert!(!overlaps(&a, &unit_box_at(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_touching_faces_count_as_overlap() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(1.0, 0.0, 0.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = [
            unit_box_at(0.0, 0.0, 0.0),
            unit_box_at(0.9, 0.1, -0.3),
            unit_box_at(1.0, 1.0, 1.0),
            unit_box_at(3.0, 0.0, 0.0),
            BoundingBox::from_center_size(Vec3::new(0.0, -0.5, 0.0), Vec3::new(20.0, 0.1, 20.0)),
        ];

        for a in &boxes {
            for b in &boxes {
                assert_eq!(overlaps(a, b), overlaps(b, a));
            }
        }
    }

    #[test]
    fn test_floor_penetration_depth() {
        let floor = BoundingBox::from_center_size(Vec3::zeros(), Vec3::new(10.0, 0.1, 10.0));

        // Body bottom at 0.0, floor top at 0.05
        let sunk = unit_box_at(0.0, 0.5, 0.0);
        assert_relative_eq!(floor_penetration_depth(&sunk, &floor), 0.05, epsilon = 1e-6);

        // Resting above the floor
        let above = unit_box_at(0.0, 2.0, 0.0);
        assert_eq!(floor_penetration_depth(&above, &floor), 0.0);

        // Centre below the floor's centre
        let below = unit_box_at(0.0, -0.4, 0.0);
        assert_eq!(floor_penetration_depth(&below, &floor), 0.0);
    }

    #[test]
    fn test_horizontal_footprint_overlap_ignores_height() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let high = unit_box_at(0.5, 10.0, 0.5);
        assert!(a.overlaps_horizontally(&high));
        assert!(!a.intersects(&high));
    }
}
