//! Runtime scene and narrow-phase driver
//!
//! The scene owns every game object and the simulation world. Each step it
//! moves dynamic objects, syncs their bodies, then runs every collider pair
//! through the proximity test and the contact classifier.

use std::io;

use flatland_physics::{
    CollisionError, Contact, ContactLog, ContactManager, ObjectKey, PhysicsConfig, PhysicsError,
    PhysicsWorld, PlacedCollider,
};
use slotmap::SlotMap;

use crate::GameObject;

/// Error from scene loading, saving, or simulation
#[derive(Debug)]
pub enum SceneError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
    /// A collider pair without a test
    Collision(CollisionError),
    /// The simulation world rejected an operation
    Physics(PhysicsError),
    /// No object with this key
    UnknownObject(ObjectKey),
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl From<CollisionError> for SceneError {
    fn from(e: CollisionError) -> Self {
        SceneError::Collision(e)
    }
}

impl From<PhysicsError> for SceneError {
    fn from(e: PhysicsError) -> Self {
        SceneError::Physics(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
            SceneError::Collision(e) => write!(f, "Collision error: {}", e),
            SceneError::Physics(e) => write!(f, "Physics error: {}", e),
            SceneError::UnknownObject(key) => write!(f, "Unknown object: {:?}", key),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Parse(e) => Some(e),
            SceneError::Serialize(e) => Some(e),
            SceneError::Collision(e) => Some(e),
            SceneError::Physics(e) => Some(e),
            SceneError::UnknownObject(_) => None,
        }
    }
}

/// Container for all game objects and the simulation world
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    objects: SlotMap<ObjectKey, GameObject>,
    world: PhysicsWorld,
    config: PhysicsConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

impl Scene {
    /// Create an empty scene with the default physics config
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: SlotMap::with_key(),
            world: PhysicsWorld::new(),
            config: PhysicsConfig::default(),
        }
    }

    /// Use the given physics config
    pub fn with_config(mut self, config: PhysicsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// The simulation world
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Add an object, returning its key
    pub fn add_object(&mut self, object: GameObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object along with its simulation body
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<GameObject> {
        let object = self.objects.remove(key)?;
        if let Some(body) = object.rigid_body.as_ref().and_then(|b| b.body_key()) {
            self.world.remove_body(body);
        }
        Some(object)
    }

    pub fn get(&self, key: ObjectKey) -> Option<&GameObject> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut GameObject> {
        self.objects.get_mut(key)
    }

    /// Find the first object with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(ObjectKey, &GameObject)> {
        self.objects
            .iter()
            .find(|(_, o)| o.name.as_deref() == Some(name))
    }

    /// Iterate over keys and objects
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &GameObject)> {
        self.objects.iter()
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The object's collider placed at its current transform
    pub fn placed_collider(&self, key: ObjectKey) -> Option<PlacedCollider<'_>> {
        self.objects.get(key)?.placed_collider(key)
    }

    /// Materialize every detached rigid body that has a collider
    ///
    /// Objects built disabled are frozen right after adapting. Returns the
    /// number of bodies created.
    pub fn adapt_bodies(&mut self) -> Result<usize, SceneError> {
        let mut adapted = 0;

        for (key, object) in self.objects.iter_mut() {
            let Some(body) = object.rigid_body.as_mut() else {
                continue;
            };
            if body.is_attached() {
                continue;
            }
            let Some(collider) = object.collider.as_ref() else {
                log::warn!("Object {:?} has a rigid body but no collider, skipping", key);
                continue;
            };

            body.adapt(
                &mut self.world,
                key,
                collider,
                object.transform.center(),
                object.transform.angle(),
                object.is_static,
            )?;
            if !object.enabled {
                body.disable(&mut self.world)?;
            }
            adapted += 1;
        }

        log::debug!("Adapted {} bodies in scene '{}'", adapted, self.name);
        Ok(adapted)
    }

    /// Enable (unfreeze) or disable (freeze, sensor only) an object
    pub fn set_enabled(&mut self, key: ObjectKey, enabled: bool) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(key)
            .ok_or(SceneError::UnknownObject(key))?;

        if let Some(body) = object.rigid_body.as_mut() {
            if enabled {
                body.enable(&mut self.world)?;
            } else {
                body.disable(&mut self.world)?;
            }
        }
        object.enabled = enabled;
        Ok(())
    }

    /// Test every collider pair and report touching ones to `manager`
    ///
    /// A pair is a candidate if either collider passes `test_epsilon` against
    /// the other with the configured proximity margin. Candidates are
    /// classified from both sides and reported once with the stronger status.
    /// Pairs of two static objects are skipped.
    ///
    /// Returns the number of contacts reported.
    pub fn detect_contacts(&self, manager: &mut dyn ContactManager) -> Result<usize, SceneError> {
        let colliders: Vec<(PlacedCollider<'_>, &GameObject)> = self
            .objects
            .iter()
            .filter_map(|(key, object)| object.placed_collider(key).map(|p| (p, object)))
            .collect();

        let margin = self.config.proximity_margin;
        let epsilon = self.config.contact_epsilon;
        let mut reported = 0;

        for (i, (a, object_a)) in colliders.iter().enumerate() {
            for (b, object_b) in &colliders[i + 1..] {
                if object_a.is_static && object_b.is_static {
                    continue;
                }
                if !(a.test_epsilon(b, margin)? || b.test_epsilon(a, margin)?) {
                    continue;
                }

                let mut sides = ContactLog::new();
                let status = a
                    .generate_contacts(&a.vertices(), b, epsilon, &mut sides)
                    .combine(b.generate_contacts(&b.vertices(), a, epsilon, &mut sides));

                if !status.is_touching() {
                    continue;
                }

                let contact = Contact {
                    a: a.owner,
                    b: b.owner,
                    status,
                    sensor: a.is_sensor() || b.is_sensor() || !object_a.enabled || !object_b.enabled,
                };
                log::trace!("{:?}", contact);
                manager.on_contact(&contact);
                reported += 1;
            }
        }

        Ok(reported)
    }

    /// Advance the scene by `dt` seconds and report contacts
    ///
    /// Enabled dynamic objects move by their velocity, attached bodies are
    /// synced to the new pose, then contacts are detected.
    pub fn step(&mut self, dt: f32, manager: &mut dyn ContactManager) -> Result<usize, SceneError> {
        for object in self.objects.values_mut() {
            if object.is_static || !object.enabled {
                continue;
            }
            object.transform.translate(object.velocity * dt);

            if let Some(body) = object.rigid_body.as_ref().filter(|b| b.is_attached()) {
                body.sync_pose(&mut self.world, object.transform.center(), object.transform.angle())?;
            }
        }

        self.detect_contacts(manager)
    }
}
