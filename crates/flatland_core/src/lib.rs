//! Core types for the Flatland engine
//!
//! This crate provides the objects the collision core works on:
//!
//! - [`Transform2D`] - Position, rotation, and scale of an object
//! - [`GameObject`] - An object with a transform, a collider, and a rigid body
//! - [`GameObjectBuilder`] - Fluent construction of game objects
//! - [`Scene`] - Container for all objects plus the simulation world
//! - [`SceneTemplate`] - Loadable/saveable scene description

mod transform;
mod game_object;
mod builder;
mod scene;
mod template;

pub use transform::Transform2D;
pub use game_object::{Components, GameObject};
pub use builder::GameObjectBuilder;
pub use scene::{Scene, SceneError};
pub use template::{ColliderTemplate, ObjectTemplate, SceneTemplate};

// Re-export physics types for convenient access through flatland_core
pub use flatland_physics::{
    Collider2D, Contact, ContactLog, ContactManager, ContactStatus, ObjectKey, PhysicsConfig,
    PhysicsMaterial, RigidBody,
};
