//! Scene templates
//!
//! A [`SceneTemplate`] is the serializable form of a scene, loaded from and
//! saved to RON files. Instantiating one builds a fresh [`Scene`]; bodies are
//! adapted separately with [`Scene::adapt_bodies`].

use std::fs;
use std::path::Path;

use flatland_math::Vec3;
use flatland_physics::{Collider2D, ColliderShape, PhysicsConfig, PhysicsMaterial};
use serde::{Serialize, Deserialize};

use crate::{GameObject, GameObjectBuilder, Scene, SceneError, Transform2D};

/// Serializable collider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ColliderTemplate {
    /// Axis-aligned box with full width and height
    Box {
        width: f32,
        height: f32,
        #[serde(default)]
        sensor: bool,
    },
    Circle {
        radius: f32,
        #[serde(default)]
        sensor: bool,
    },
}

impl ColliderTemplate {
    /// Create the collider described by this template
    pub fn to_collider(&self) -> Collider2D {
        match *self {
            ColliderTemplate::Box { width, height, sensor } => {
                Collider2D::new_box(width, height).with_sensor(sensor)
            }
            ColliderTemplate::Circle { radius, sensor } => {
                Collider2D::new_circle(radius).with_sensor(sensor)
            }
        }
    }
}

impl From<&Collider2D> for ColliderTemplate {
    fn from(collider: &Collider2D) -> Self {
        match collider.shape {
            ColliderShape::Box(b) => ColliderTemplate::Box {
                width: b.width,
                height: b.height,
                sensor: collider.is_sensor,
            },
            ColliderShape::Circle(c) => ColliderTemplate::Circle {
                radius: c.radius,
                sensor: collider.is_sensor,
            },
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// Serializable game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Optional name for lookup
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub transform: Transform2D,
    #[serde(default)]
    pub velocity: Vec3,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub collider: Option<ColliderTemplate>,
    /// Material of the rigid body; no body if absent
    #[serde(default)]
    pub rigid_body: Option<PhysicsMaterial>,
}

impl ObjectTemplate {
    /// Create a template for an enabled object with the given transform
    pub fn new(transform: Transform2D) -> Self {
        Self {
            name: None,
            tags: Vec::new(),
            transform,
            velocity: Vec3::ZERO,
            is_static: false,
            enabled: true,
            collider: None,
            rigid_body: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_collider(mut self, collider: ColliderTemplate) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_rigid_body(mut self, material: PhysicsMaterial) -> Self {
        self.rigid_body = Some(material);
        self
    }

    /// Build the game object described by this template
    pub fn to_object(&self) -> GameObject {
        let mut builder = GameObjectBuilder::begin()
            .set_transform(self.transform)
            .set_velocity(self.velocity)
            .set_static(self.is_static)
            .set_enabled(self.enabled);

        if let Some(ref name) = self.name {
            builder = builder.set_name(name.clone());
        }
        for tag in &self.tags {
            builder = builder.add_tag(tag.clone());
        }
        if let Some(ref collider) = self.collider {
            builder = builder.set_collider(collider.to_collider());
        }
        if let Some(material) = self.rigid_body {
            builder = builder.set_material(material);
        }
        builder.end()
    }
}

impl From<&GameObject> for ObjectTemplate {
    fn from(object: &GameObject) -> Self {
        let mut tags: Vec<String> = object.tags.iter().cloned().collect();
        tags.sort();
        Self {
            name: object.name.clone(),
            tags,
            transform: object.transform,
            velocity: object.velocity,
            is_static: object.is_static,
            enabled: object.is_enabled(),
            collider: object.collider.as_ref().map(ColliderTemplate::from),
            rigid_body: object.rigid_body.as_ref().map(|b| b.material),
        }
    }
}

/// A serializable scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneTemplate {
    /// Scene name (for display/debugging)
    pub name: String,
    pub objects: Vec<ObjectTemplate>,
    /// Overrides the contact tolerance from the physics config
    #[serde(default)]
    pub contact_epsilon: Option<f32>,
    /// Overrides the proximity margin from the physics config
    #[serde(default)]
    pub proximity_margin: Option<f32>,
}

impl SceneTemplate {
    /// Create a new empty scene template
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            contact_epsilon: None,
            proximity_margin: None,
        }
    }

    /// Capture a runtime scene as a template
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            name: scene.name.clone(),
            objects: scene.iter().map(|(_, o)| ObjectTemplate::from(o)).collect(),
            contact_epsilon: Some(scene.config().contact_epsilon),
            proximity_margin: Some(scene.config().proximity_margin),
        }
    }

    /// Load a scene template from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a scene template from RON text
    pub fn from_ron(contents: &str) -> Result<Self, SceneError> {
        let template = ron::from_str(contents)?;
        Ok(template)
    }

    /// Save a scene template to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn add_object(&mut self, object: ObjectTemplate) {
        self.objects.push(object);
    }

    /// Physics config for this scene: `base` with this template's overrides
    pub fn physics_config(&self, base: PhysicsConfig) -> PhysicsConfig {
        PhysicsConfig {
            contact_epsilon: self.contact_epsilon.unwrap_or(base.contact_epsilon),
            proximity_margin: self.proximity_margin.unwrap_or(base.proximity_margin),
        }
    }

    /// Build a runtime scene from this template
    pub fn instantiate(&self, base: PhysicsConfig) -> Scene {
        let mut scene = Scene::new(self.name.clone()).with_config(self.physics_config(base));
        for object in &self.objects {
            scene.add_object(object.to_object());
        }
        log::debug!("Instantiated scene '{}' with {} objects", self.name, scene.object_count());
        scene
    }
}
