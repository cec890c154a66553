//! 2D Transform (position, rotation, scale)
//!
//! Position keeps a z component for layering. Rotation is stored as Euler
//! angles in radians; only `rotation.z` turns anything in the plane.

use flatland_math::Vec3;
use serde::{Serialize, Deserialize};

/// Position, rotation, and scale of a game object
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Position (z is the layering depth)
    pub position: Vec3,
    /// Euler rotation in radians
    #[serde(default)]
    pub rotation: Vec3,
    /// Per-axis scale
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Set the rotation around the z axis
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.rotation.z = angle;
        self
    }

    /// Center used for collider placement
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.position
    }

    /// Rotation in the plane, in radians
    #[inline]
    pub fn angle(&self) -> f32 {
        self.rotation.z
    }

    /// Move by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}
