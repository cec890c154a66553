//! Rigid-body adapter between a game object and the simulation world
//!
//! A [`RigidBody`] starts detached. [`RigidBody::adapt`] materializes it as a
//! body plus one fixture in a [`SimulationWorld`]; from then on the adapter
//! only holds keys into that world, never the world itself.

use flatland_math::Vec3;

use crate::collider::Collider2D;
use crate::error::PhysicsError;
use crate::material::PhysicsMaterial;
use crate::world::{BodyDef, BodyKey, BodyType, FixtureDef, FixtureKey, ObjectKey, SimulationWorld};

/// Attachment state of a rigid body
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BodyState {
    /// No body exists in the simulation yet
    #[default]
    Detached,
    /// Body and fixtures exist in the simulation
    Attached { body: BodyKey, fixtures: Vec<FixtureKey> },
}

/// Rigid-body component of a game object
#[derive(Clone, Debug, Default)]
pub struct RigidBody {
    /// Material handed to every fixture
    pub material: PhysicsMaterial,
    state: BodyState,
    enabled: bool,
    /// Sensor flag of the collider at adapt time, restored by `enable`
    sensor_on_enable: bool,
}

impl RigidBody {
    /// Create a detached rigid body with the given material values
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self::with_material(PhysicsMaterial::new(density, friction, restitution))
    }

    /// Create a detached rigid body from a material
    pub fn with_material(material: PhysicsMaterial) -> Self {
        Self {
            material,
            state: BodyState::Detached,
            enabled: false,
            sensor_on_enable: false,
        }
    }

    pub fn state(&self) -> &BodyState {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, BodyState::Attached { .. })
    }

    /// Whether the body is active and its fixtures blocking
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Key of the simulation body, if attached
    pub fn body_key(&self) -> Option<BodyKey> {
        match &self.state {
            BodyState::Attached { body, .. } => Some(*body),
            BodyState::Detached => None,
        }
    }

    /// Materialize this body in `world`
    ///
    /// The fixture takes its shape and sensor flag from `collider` and its
    /// density, friction and restitution from the material. The body starts
    /// at `position.xy()` with `angle`; static bodies have fixed rotation.
    ///
    /// Fails with [`PhysicsError::AlreadyAttached`] if the body was adapted
    /// before. The world is left untouched in that case.
    pub fn adapt<W: SimulationWorld + ?Sized>(
        &mut self,
        world: &mut W,
        owner: ObjectKey,
        collider: &Collider2D,
        position: Vec3,
        angle: f32,
        is_static: bool,
    ) -> Result<BodyKey, PhysicsError> {
        if self.is_attached() {
            log::warn!("Rigid body of {:?} is already attached", owner);
            return Err(PhysicsError::AlreadyAttached);
        }

        let mut fixture_def = FixtureDef {
            density: self.material.density,
            friction: self.material.friction,
            restitution: self.material.restitution,
            ..FixtureDef::default()
        };
        collider.adapt(&mut fixture_def);

        let body_def = BodyDef {
            body_type: if is_static { BodyType::Static } else { BodyType::Dynamic },
            position: position.xy(),
            angle,
            fixed_rotation: is_static,
            user_data: Some(owner),
        };

        let body = world.create_body(&body_def);
        let fixture = world.create_fixture(body, &fixture_def)?;

        log::debug!(
            "Adapted {:?} as {:?} body {:?} at {:?}",
            owner, body_def.body_type, body, body_def.position
        );

        self.state = BodyState::Attached {
            body,
            fixtures: vec![fixture],
        };
        self.enabled = true;
        self.sensor_on_enable = collider.is_sensor;
        Ok(body)
    }

    /// Unfreeze the body and make its fixtures blocking again
    ///
    /// Fixtures get back the sensor flag their collider had when adapted.
    pub fn enable<W: SimulationWorld + ?Sized>(&mut self, world: &mut W) -> Result<(), PhysicsError> {
        self.set_enabled(world, true)
    }

    /// Freeze the body and turn all of its fixtures into sensors
    pub fn disable<W: SimulationWorld + ?Sized>(&mut self, world: &mut W) -> Result<(), PhysicsError> {
        self.set_enabled(world, false)
    }

    fn set_enabled<W: SimulationWorld + ?Sized>(&mut self, world: &mut W, enabled: bool) -> Result<(), PhysicsError> {
        let body = self.body_key().ok_or(PhysicsError::NotAttached)?;
        let sensor = if enabled { self.sensor_on_enable } else { true };

        world.set_active(body, enabled)?;
        for fixture in world.fixtures(body) {
            world.set_sensor(fixture, sensor);
        }

        self.enabled = enabled;
        Ok(())
    }

    /// Move the simulation body to the owner's current pose
    pub fn sync_pose<W: SimulationWorld + ?Sized>(
        &self,
        world: &mut W,
        position: Vec3,
        angle: f32,
    ) -> Result<(), PhysicsError> {
        let body = self.body_key().ok_or(PhysicsError::NotAttached)?;
        world.set_transform(body, position.xy(), angle)
    }
}
