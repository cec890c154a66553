//! 2D collision detection for Flatland
//!
//! This crate provides the narrow-phase collision core:
//! - Rectangle/point geometry tests
//! - Box and circle colliders with on-demand bounding boxes
//! - Shape dispatch (`test` / `test_epsilon`)
//! - Vertex-vertex and vertex-edge contact classification
//! - A rigid-body adapter over the simulation world boundary

pub mod body;
pub mod collider;
pub mod contact;
pub mod error;
pub mod geometry;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyState, RigidBody};
pub use collider::{Collider2D, ColliderShape, PlacedCollider};
pub use contact::{Contact, ContactLog, ContactManager, ContactStatus};
pub use error::{CollisionError, PhysicsError};
pub use geometry::test_rectangle_point;
pub use material::PhysicsMaterial;
pub use shapes::{BoundingBox, BoxCollider, CircleCollider, ShapeKind};
pub use world::{
    Body, BodyDef, BodyKey, BodyType, Fixture, FixtureDef, FixtureKey, FixtureShape, ObjectKey,
    PhysicsConfig, PhysicsWorld, SimulationWorld,
};
