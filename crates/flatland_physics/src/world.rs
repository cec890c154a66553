//! Simulation world boundary
//!
//! The rigid-body adapter talks to the underlying dynamics engine only
//! through [`SimulationWorld`]. [`PhysicsWorld`] is the in-memory
//! implementation used by the scene: it stores bodies and fixtures and their
//! active/sensor flags, but does not integrate or resolve anything itself.

use flatland_math::Vec2;
use slotmap::{new_key_type, SlotMap};

use crate::error::PhysicsError;

// Define generational key types for world objects
new_key_type! {
    /// Key to a game object in the owning scene
    ///
    /// Colliders and bodies refer back to their owner through this key and
    /// never own it; the scene resolves it by lookup.
    pub struct ObjectKey;

    /// Key to a body in the simulation world
    ///
    /// Uses generational indexing so a key to a removed body can never
    /// resolve to a body that later reuses the slot.
    pub struct BodyKey;

    /// Key to a fixture in the simulation world
    pub struct FixtureKey;
}

/// Configuration for collision queries
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Tolerance of the contact band: vertices closer than this are touching
    pub contact_epsilon: f32,
    /// Slack used by `test_epsilon` when selecting candidate pairs
    pub proximity_margin: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            contact_epsilon: 0.01,
            proximity_margin: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Create a new config with the given contact tolerance and proximity margin
    pub fn new(contact_epsilon: f32, proximity_margin: f32) -> Self {
        Self {
            contact_epsilon,
            proximity_margin,
        }
    }
}

/// Type of body in the simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyType {
    /// Moved by the simulation
    #[default]
    Dynamic,
    /// Never moved by the simulation
    Static,
}

/// Shape of a fixture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FixtureShape {
    /// Axis-aligned box given by its half-extents
    Box { half_width: f32, half_height: f32 },
    /// Circle given by its radius
    Circle { radius: f32 },
}

/// Description of a fixture to create on a body
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureDef {
    pub shape: Option<FixtureShape>,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub is_sensor: bool,
}

impl Default for FixtureDef {
    fn default() -> Self {
        Self {
            shape: None,
            density: 1.0,
            friction: 0.2,
            restitution: 0.0,
            is_sensor: false,
        }
    }
}

/// Description of a body to create in the world
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyDef {
    pub body_type: BodyType,
    pub position: Vec2,
    /// Rotation around the z axis, in radians
    pub angle: f32,
    pub fixed_rotation: bool,
    /// Game object that owns the body
    pub user_data: Option<ObjectKey>,
}

/// A fixture attached to a body
#[derive(Clone, Debug)]
pub struct Fixture {
    pub body: BodyKey,
    pub def: FixtureDef,
    is_sensor: bool,
}

impl Fixture {
    pub fn is_sensor(&self) -> bool {
        self.is_sensor
    }
}

/// A body living in the world
#[derive(Clone, Debug)]
pub struct Body {
    pub body_type: BodyType,
    pub position: Vec2,
    pub angle: f32,
    pub fixed_rotation: bool,
    pub user_data: Option<ObjectKey>,
    active: bool,
    fixtures: Vec<FixtureKey>,
}

impl Body {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    pub fn fixtures(&self) -> &[FixtureKey] {
        &self.fixtures
    }
}

/// Operations the rigid-body adapter needs from a dynamics engine
pub trait SimulationWorld {
    /// Materialize a body from its definition
    fn create_body(&mut self, def: &BodyDef) -> BodyKey;

    /// Attach a fixture to an existing body
    fn create_fixture(&mut self, body: BodyKey, def: &FixtureDef) -> Result<FixtureKey, PhysicsError>;

    /// Activate (unfreeze) or deactivate (freeze) a body
    fn set_active(&mut self, body: BodyKey, active: bool) -> Result<(), PhysicsError>;

    /// Turn a fixture into a non-blocking sensor, or back
    fn set_sensor(&mut self, fixture: FixtureKey, is_sensor: bool);

    /// All fixtures attached to a body
    fn fixtures(&self, body: BodyKey) -> Vec<FixtureKey>;

    /// Move a body to a new pose
    fn set_transform(&mut self, body: BodyKey, position: Vec2, angle: f32) -> Result<(), PhysicsError>;
}

/// In-memory simulation world
pub struct PhysicsWorld {
    bodies: SlotMap<BodyKey, Body>,
    fixtures: SlotMap<FixtureKey, Fixture>,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            bodies: SlotMap::with_key(),
            fixtures: SlotMap::with_key(),
        }
    }

    /// Get a body by key
    pub fn body(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key)
    }

    /// Get a fixture by key
    pub fn fixture(&self, key: FixtureKey) -> Option<&Fixture> {
        self.fixtures.get(key)
    }

    /// Remove a body and all of its fixtures
    pub fn remove_body(&mut self, key: BodyKey) -> Option<Body> {
        let body = self.bodies.remove(key)?;
        for fixture in &body.fixtures {
            self.fixtures.remove(*fixture);
        }
        Some(body)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get the number of active bodies in the world
    pub fn active_body_count(&self) -> usize {
        self.bodies.values().filter(|b| b.active).count()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationWorld for PhysicsWorld {
    fn create_body(&mut self, def: &BodyDef) -> BodyKey {
        self.bodies.insert(Body {
            body_type: def.body_type,
            position: def.position,
            angle: def.angle,
            fixed_rotation: def.fixed_rotation,
            user_data: def.user_data,
            active: true,
            fixtures: Vec::new(),
        })
    }

    fn create_fixture(&mut self, body: BodyKey, def: &FixtureDef) -> Result<FixtureKey, PhysicsError> {
        if !self.bodies.contains_key(body) {
            return Err(PhysicsError::UnknownBody(body));
        }
        let key = self.fixtures.insert(Fixture {
            body,
            def: def.clone(),
            is_sensor: def.is_sensor,
        });
        self.bodies[body].fixtures.push(key);
        Ok(key)
    }

    fn set_active(&mut self, body: BodyKey, active: bool) -> Result<(), PhysicsError> {
        let body = self.bodies.get_mut(body).ok_or(PhysicsError::UnknownBody(body))?;
        body.active = active;
        Ok(())
    }

    fn set_sensor(&mut self, fixture: FixtureKey, is_sensor: bool) {
        if let Some(fixture) = self.fixtures.get_mut(fixture) {
            fixture.is_sensor = is_sensor;
        }
    }

    fn fixtures(&self, body: BodyKey) -> Vec<FixtureKey> {
        self.bodies
            .get(body)
            .map(|b| b.fixtures.clone())
            .unwrap_or_default()
    }

    fn set_transform(&mut self, body: BodyKey, position: Vec2, angle: f32) -> Result<(), PhysicsError> {
        let body = self.bodies.get_mut(body).ok_or(PhysicsError::UnknownBody(body))?;
        body.position = position;
        body.angle = angle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_fixture() -> FixtureDef {
        FixtureDef {
            shape: Some(FixtureShape::Box { half_width: 1.0, half_height: 1.0 }),
            ..FixtureDef::default()
        }
    }

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.contact_epsilon, 0.01);
        assert_eq!(config.proximity_margin, 0.1);
    }

    #[test]
    fn test_create_body_and_fixture() {
        let mut world = PhysicsWorld::new();
        let def = BodyDef {
            body_type: BodyType::Static,
            position: Vec2::new(1.0, 2.0),
            angle: 0.5,
            fixed_rotation: true,
            user_data: None,
        };
        let body = world.create_body(&def);
        let fixture = world.create_fixture(body, &box_fixture()).unwrap();

        let stored = world.body(body).expect("Body should exist");
        assert!(stored.is_static());
        assert!(stored.is_active());
        assert_eq!(stored.position, Vec2::new(1.0, 2.0));
        assert_eq!(stored.fixtures(), &[fixture]);
        assert_eq!(world.fixture(fixture).unwrap().body, body);
    }

    #[test]
    fn test_fixture_on_unknown_body() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(&BodyDef::default());
        world.remove_body(body);

        let result = world.create_fixture(body, &box_fixture());
        assert_eq!(result, Err(PhysicsError::UnknownBody(body)));
    }

    #[test]
    fn test_active_and_sensor_flags() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(&BodyDef::default());
        let fixture = world.create_fixture(body, &box_fixture()).unwrap();

        world.set_active(body, false).unwrap();
        world.set_sensor(fixture, true);

        assert!(!world.body(body).unwrap().is_active());
        assert!(world.fixture(fixture).unwrap().is_sensor());
        assert_eq!(world.active_body_count(), 0);
    }

    #[test]
    fn test_remove_body_removes_fixtures() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(&BodyDef::default());
        let fixture = world.create_fixture(body, &box_fixture()).unwrap();

        assert!(world.remove_body(body).is_some());
        assert!(world.fixture(fixture).is_none());
        assert!(world.fixtures(body).is_empty());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_set_transform() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(&BodyDef::default());
        world.set_transform(body, Vec2::new(3.0, 4.0), 1.0).unwrap();

        let stored = world.body(body).unwrap();
        assert_eq!(stored.position, Vec2::new(3.0, 4.0));
        assert_eq!(stored.angle, 1.0);
    }
}
