//! Fluent construction of game objects

use flatland_math::Vec3;
use flatland_physics::{Collider2D, PhysicsMaterial, RigidBody};

use crate::{GameObject, Transform2D};

/// Builds a [`GameObject`] one component at a time
///
/// ```
/// use flatland_core::GameObjectBuilder;
/// use flatland_math::Vec3;
/// use flatland_physics::Collider2D;
///
/// let wall = GameObjectBuilder::begin()
///     .set_name("wall")
///     .set_static(true)
///     .set_position(Vec3::new(0.0, -5.0, 0.0))
///     .set_collider(Collider2D::new_box(20.0, 1.0))
///     .set_rigid_body(1.0, 0.5, 0.0)
///     .end();
///
/// assert!(wall.is_static());
/// ```
#[derive(Debug, Default)]
pub struct GameObjectBuilder {
    object: GameObject,
}

impl GameObjectBuilder {
    /// An object with only a transform
    pub fn empty() -> GameObject {
        GameObject::new()
    }

    /// Start building a new object
    pub fn begin() -> Self {
        Self {
            object: Self::empty(),
        }
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.object.name = Some(name.into());
        self
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.object.tags.insert(tag.into());
        self
    }

    pub fn set_static(mut self, is_static: bool) -> Self {
        self.object.is_static = is_static;
        self
    }

    /// Start the object disabled (frozen, sensor only) once adapted
    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.object.enabled = enabled;
        self
    }

    pub fn set_transform(mut self, transform: Transform2D) -> Self {
        self.object.transform = transform;
        self
    }

    pub fn set_position(mut self, position: Vec3) -> Self {
        self.object.transform.position = position;
        self
    }

    /// Euler rotation in radians
    pub fn set_rotation(mut self, rotation: Vec3) -> Self {
        self.object.transform.rotation = rotation;
        self
    }

    pub fn set_scale(mut self, scale: Vec3) -> Self {
        self.object.transform.scale = scale;
        self
    }

    pub fn set_velocity(mut self, velocity: Vec3) -> Self {
        self.object.velocity = velocity;
        self
    }

    pub fn set_collider(mut self, collider: Collider2D) -> Self {
        self.object.collider = Some(collider);
        self
    }

    /// Attach a detached rigid body with the given material values
    pub fn set_rigid_body(mut self, density: f32, friction: f32, restitution: f32) -> Self {
        self.object.rigid_body = Some(RigidBody::new(density, friction, restitution));
        self
    }

    /// Attach a detached rigid body made of `material`
    pub fn set_material(mut self, material: PhysicsMaterial) -> Self {
        self.object.rigid_body = Some(RigidBody::with_material(material));
        self
    }

    /// Finish and return the object
    pub fn end(self) -> GameObject {
        self.object
    }
}
