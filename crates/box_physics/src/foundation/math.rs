//! Math utilities and types
//!
//! Provides the vector types shared by the physics core and its hosts.

pub use nalgebra::{
    Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// World up direction (Y-up, right-handed)
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// One of the three coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal X axis
    X,
    /// Vertical Y axis
    Y,
    /// Horizontal Z axis
    Z,
}

impl Axis {
    /// All axes in component order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a `Vec3`
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Whether this is the vertical axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Axis::Y)
    }

    /// Axis whose component of `v` has the smallest value.
    ///
    /// Ties resolve in X, Y, Z order.
    pub fn of_min_component(v: &Vec3) -> Axis {
        let mut best = Axis::X;
        for axis in [Axis::Y, Axis::Z] {
            if v[axis.index()] < v[best.index()] {
                best = axis;
            }
        }
        best
    }
}

/// Transform representing position, rotation, and scale
///
/// Bodies carry no rotation; the rotation is kept so hosts can mirror a body
/// into a renderable transform without losing their own orientation data.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and scale
    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            scale,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}
