//! Collider component and pairwise test dispatch
//!
//! A [`Collider2D`] is stored on its game object without any pointer back to
//! it. Queries go through a [`PlacedCollider`], a short-lived borrow that
//! pairs the collider with its owner's key and current center, so the world
//! geometry is always rebuilt from the transform as it is right now.

use flatland_math::{Vec2, Vec3};

use crate::error::CollisionError;
use crate::shapes::{BoundingBox, BoxCollider, CircleCollider, ShapeKind};
use crate::world::{FixtureDef, FixtureShape, ObjectKey};

/// Collision shape of a collider
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColliderShape {
    Box(BoxCollider),
    Circle(CircleCollider),
}

impl ColliderShape {
    /// The kind of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            ColliderShape::Box(_) => ShapeKind::Box,
            ColliderShape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn bounding_box(&self, center: Vec3) -> BoundingBox {
        match self {
            ColliderShape::Box(b) => b.bounding_box(center),
            ColliderShape::Circle(c) => c.bounding_box(center),
        }
    }

    pub fn vertices(&self, center: Vec3) -> [Vec3; 4] {
        match self {
            ColliderShape::Box(b) => b.vertices(center),
            ColliderShape::Circle(c) => c.vertices(center),
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            ColliderShape::Box(b) => b.radius(),
            ColliderShape::Circle(c) => c.radius(),
        }
    }

    pub fn normals(&self, center: Vec3) -> [Vec2; 4] {
        match self {
            ColliderShape::Box(b) => b.normals(center),
            ColliderShape::Circle(c) => c.normals(center),
        }
    }

    pub fn test_point(&self, center: Vec3, point: Vec2) -> bool {
        match self {
            ColliderShape::Box(b) => b.test_point(center, point),
            ColliderShape::Circle(c) => c.test_point(center, point),
        }
    }
}

/// Collider component attached to a game object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider2D {
    /// The collision shape
    pub shape: ColliderShape,
    /// Sensors detect overlap without blocking
    pub is_sensor: bool,
}

impl Collider2D {
    /// Create an axis-aligned box collider
    pub fn new_box(width: f32, height: f32) -> Self {
        Self {
            shape: ColliderShape::Box(BoxCollider::new(width, height)),
            is_sensor: false,
        }
    }

    /// Create a circle collider
    pub fn new_circle(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Circle(CircleCollider::new(radius)),
            is_sensor: false,
        }
    }

    /// Set whether this collider is a sensor
    pub fn with_sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// The kind of this collider's shape
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Pair this collider with its owner and the owner's current center
    pub fn place(&self, owner: ObjectKey, center: Vec3) -> PlacedCollider<'_> {
        PlacedCollider {
            owner,
            collider: self,
            center,
        }
    }

    /// Write this collider's shape and sensor flag into a fixture definition
    pub fn adapt(&self, fixture: &mut FixtureDef) {
        fixture.is_sensor = self.is_sensor;
        fixture.shape = Some(match self.shape {
            ColliderShape::Box(b) => {
                let half = b.half_extents();
                FixtureShape::Box {
                    half_width: half.x,
                    half_height: half.y,
                }
            }
            ColliderShape::Circle(c) => FixtureShape::Circle { radius: c.radius },
        });
    }
}

/// A collider positioned at its owner's current center for one query
#[derive(Clone, Copy, Debug)]
pub struct PlacedCollider<'a> {
    /// Game object that owns the collider
    pub owner: ObjectKey,
    pub collider: &'a Collider2D,
    /// Owner's transform position at the time of the query
    pub center: Vec3,
}

impl<'a> PlacedCollider<'a> {
    pub fn kind(&self) -> ShapeKind {
        self.collider.kind()
    }

    pub fn is_sensor(&self) -> bool {
        self.collider.is_sensor
    }

    /// Bounding box around the current center
    pub fn bounding_box(&self) -> BoundingBox {
        self.collider.shape.bounding_box(self.center)
    }

    /// Test geometry (bounding box corners, `lt, lb, rb, rt`)
    pub fn vertices(&self) -> [Vec3; 4] {
        self.collider.shape.vertices(self.center)
    }

    pub fn radius(&self) -> f32 {
        self.collider.shape.radius()
    }

    pub fn normals(&self) -> [Vec2; 4] {
        self.collider.shape.normals(self.center)
    }

    pub fn test_point(&self, point: Vec2) -> bool {
        self.collider.shape.test_point(self.center, point)
    }

    /// Test for overlap with another collider
    pub fn test(&self, other: &PlacedCollider<'_>) -> Result<bool, CollisionError> {
        self.test_epsilon(other, 0.0)
    }

    /// Test for overlap with another collider, with `epsilon` of slack
    ///
    /// Dispatches on the other collider's shape. Shape pairs without a test
    /// return [`CollisionError::UnsupportedShape`].
    pub fn test_epsilon(&self, other: &PlacedCollider<'_>, epsilon: f32) -> Result<bool, CollisionError> {
        match other.collider.shape {
            ColliderShape::Box(_) => self.test_rectangle(other, epsilon),
            ColliderShape::Circle(circle) => self.test_circle(other, circle, epsilon),
        }
    }

    fn test_rectangle(&self, other: &PlacedCollider<'_>, epsilon: f32) -> Result<bool, CollisionError> {
        match self.collider.shape {
            ColliderShape::Box(b) => Ok(b.test_rectangle(self.center, &other.vertices(), epsilon)),
            ColliderShape::Circle(_) => Err(self.unsupported(other)),
        }
    }

    fn test_circle(
        &self,
        other: &PlacedCollider<'_>,
        circle: CircleCollider,
        epsilon: f32,
    ) -> Result<bool, CollisionError> {
        match self.collider.shape {
            ColliderShape::Circle(c) => Ok(c.test_circle(self.center, other.center, circle.radius, epsilon)),
            ColliderShape::Box(_) => Err(self.unsupported(other)),
        }
    }

    fn unsupported(&self, other: &PlacedCollider<'_>) -> CollisionError {
        log::warn!("No {} vs {} collision test", self.kind(), other.kind());
        CollisionError::UnsupportedShape {
            this: self.kind(),
            other: other.kind(),
        }
    }
}
