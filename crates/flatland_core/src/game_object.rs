//! Game objects
//!
//! A game object owns a transform plus at most one collider and one rigid
//! body. Neither component points back at the object; the scene hands out
//! the object's key when a query needs it.

use std::collections::HashSet;

use bitflags::bitflags;
use flatland_math::Vec3;
use flatland_physics::{Collider2D, ObjectKey, PlacedCollider, RigidBody};

use crate::Transform2D;

bitflags! {
    /// Components present on a game object
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Components: u8 {
        const TRANSFORM = 1 << 0;
        const COLLIDER = 1 << 1;
        const RIGID_BODY = 1 << 2;
    }
}

/// An object in the scene
#[derive(Clone, Debug)]
pub struct GameObject {
    /// Optional name for lookup
    pub name: Option<String>,
    /// Tags for categorization (e.g., "player", "wall")
    pub tags: HashSet<String>,
    pub transform: Transform2D,
    /// Velocity applied by `Scene::step` (units per second)
    pub velocity: Vec3,
    /// Static objects never move and get static bodies
    pub is_static: bool,
    pub collider: Option<Collider2D>,
    pub rigid_body: Option<RigidBody>,
    pub(crate) enabled: bool,
}

impl Default for GameObject {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObject {
    /// Create an enabled, dynamic object at the origin with no components
    pub fn new() -> Self {
        Self {
            name: None,
            tags: HashSet::new(),
            transform: Transform2D::identity(),
            velocity: Vec3::ZERO,
            is_static: false,
            collider: None,
            rigid_body: None,
            enabled: true,
        }
    }

    /// Set the name of this object
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this object
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the object takes part in the simulation
    ///
    /// Disabled objects are frozen and only show up as sensors.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Which components this object carries
    pub fn components(&self) -> Components {
        let mut components = Components::TRANSFORM;
        if self.collider.is_some() {
            components |= Components::COLLIDER;
        }
        if self.rigid_body.is_some() {
            components |= Components::RIGID_BODY;
        }
        components
    }

    pub fn has_component(&self, component: Components) -> bool {
        self.components().contains(component)
    }

    /// The collider placed at the current transform
    pub fn placed_collider(&self, key: ObjectKey) -> Option<PlacedCollider<'_>> {
        self.collider
            .as_ref()
            .map(|collider| collider.place(key, self.transform.center()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_new_object() {
        let object = GameObject::new();
        assert!(object.is_enabled());
        assert!(!object.is_static());
        assert_eq!(object.components(), Components::TRANSFORM);
        assert!(object.placed_collider(ObjectKey::default()).is_none());
    }

    #[test]
    fn test_components_mask() {
        let mut object = GameObject::new();
        object.collider = Some(Collider2D::new_box(1.0, 1.0));
        assert!(object.has_component(Components::COLLIDER));
        assert!(!object.has_component(Components::RIGID_BODY));

        object.rigid_body = Some(RigidBody::new(1.0, 0.5, 0.0));
        assert_eq!(object.components(), Components::all());
        assert!(object.has_component(Components::COLLIDER | Components::RIGID_BODY));
    }

    #[test]
    fn test_name_and_tags() {
        let object = GameObject::new().with_name("crate").with_tag("pushable");
        assert_eq!(object.name.as_deref(), Some("crate"));
        assert!(object.has_tag("pushable"));
        assert!(!object.has_tag("wall"));
    }

    #[test]
    fn test_placed_collider_uses_transform() {
        let mut keys: SlotMap<ObjectKey, ()> = SlotMap::with_key();
        let key = keys.insert(());

        let mut object = GameObject::new();
        object.collider = Some(Collider2D::new_box(2.0, 2.0));
        object.transform.position = Vec3::new(3.0, 4.0, 0.0);

        let placed = object.placed_collider(key).unwrap();
        assert_eq!(placed.owner, key);
        assert_eq!(placed.center, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(placed.vertices()[0], Vec3::new(2.0, 5.0, 0.0));
    }
}
