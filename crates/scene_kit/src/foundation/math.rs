//! Math utilities and types
//!
//! Provides the vector and rotation types used by the targeting code, plus
//! helpers that work on the horizontal (XZ) plane. The Y axis is "up".

pub use nalgebra::{Vector3, UnitQuaternion};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Transform representing position, rotation, and scale
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

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Turn this transform about the Y axis so its forward (+Z) faces `target`
    /// on the ground plane.
    pub fn face_towards(&mut self, target: Vec3) {
        self.rotation = look_towards(self.position, target);
    }

    /// Local forward (+Z) direction in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::z()
    }
}

/// Project a vector onto the ground plane by zeroing its height.
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Squared distance between `a` and `b` ignoring the Y axis.
#[inline]
pub fn planar_distance_squared(a: Vec3, b: Vec3) -> f32 {
    (flatten(a) - flatten(b)).norm_squared()
}

/// Distance between `a` and `b` ignoring the Y axis.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar_distance_squared(a, b).sqrt()
}

/// Yaw-only rotation whose forward (+Z) axis points from `origin` towards
/// `target` on the ground plane.
///
/// Returns identity when the two points share the same XZ coordinates, since
/// there is no horizontal direction to face.
pub fn look_towards(origin: Vec3, target: Vec3) -> Quat {
    let offset = flatten(target - origin);
    if offset.norm_squared() <= f32::EPSILON {
        return Quat::identity();
    }
    Quat::face_towards(&offset, &Vec3::y())
}
