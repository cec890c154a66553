//! Physical material properties copied into fixtures

use serde::{Serialize, Deserialize};

/// Physical material of a rigid body
///
/// The values are handed to the simulation world unchanged when the body is
/// adapted; the collision core itself never reads them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Mass per unit area
    pub density: f32,
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            density: 1.0,
            friction: 0.5,
            restitution: 0.0,
        }
    }
}

impl PhysicsMaterial {
    /// Ice-like material: very low friction, slight bounce
    pub const ICE: Self = Self {
        density: 0.9,
        friction: 0.05,
        restitution: 0.1,
    };

    /// Rubber-like material: high friction, very bouncy
    pub const RUBBER: Self = Self {
        density: 1.1,
        friction: 0.9,
        restitution: 0.8,
    };

    /// Wood-like material: moderate friction, low bounce
    pub const WOOD: Self = Self {
        density: 0.6,
        friction: 0.5,
        restitution: 0.2,
    };

    /// Create a new material
    ///
    /// Density is clamped to be non-negative, friction and restitution to
    /// the range [0.0, 1.0].
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density: density.max(0.0),
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }
}
