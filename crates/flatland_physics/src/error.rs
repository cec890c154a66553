//! Error types for collision queries and the rigid-body adapter
//!
//! Both kinds signal programming or engine-configuration mistakes. They are
//! returned to the caller as-is; nothing in this crate retries or substitutes
//! a default result.

use std::fmt;

use crate::shapes::ShapeKind;
use crate::world::BodyKey;

/// Error from a pairwise collider test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// The collider does not implement a test against the other shape kind
    UnsupportedShape {
        /// Shape of the collider the test was invoked on
        this: ShapeKind,
        /// Shape of the collider it was tested against
        other: ShapeKind,
    },
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionError::UnsupportedShape { this, other } => {
                write!(f, "Unsupported shape test: {} vs {}", this, other)
            }
        }
    }
}

impl std::error::Error for CollisionError {}

/// Error from the rigid-body adapter or the simulation world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// `adapt` was called on a body that already lives in a world
    AlreadyAttached,
    /// The operation needs a body that has been adapted into a world
    NotAttached,
    /// The world has no body under this key
    UnknownBody(BodyKey),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::AlreadyAttached => write!(f, "Rigid body is already attached to a world"),
            PhysicsError::NotAttached => write!(f, "Rigid body is not attached to a world"),
            PhysicsError::UnknownBody(key) => write!(f, "Unknown body: {:?}", key),
        }
    }
}

impl std::error::Error for PhysicsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_shape_display() {
        let err = CollisionError::UnsupportedShape {
            this: ShapeKind::Box,
            other: ShapeKind::Circle,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Unsupported"));
        assert!(msg.contains("box vs circle"));
    }

    #[test]
    fn test_physics_error_display() {
        assert!(PhysicsError::AlreadyAttached.to_string().contains("already attached"));
        assert!(PhysicsError::NotAttached.to_string().contains("not attached"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&PhysicsError::NotAttached);
        assert_error(&CollisionError::UnsupportedShape {
            this: ShapeKind::Circle,
            other: ShapeKind::Box,
        });
    }
}
