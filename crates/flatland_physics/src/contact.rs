//! Contact classification
//!
//! A candidate pair is classified in two phases, both of which always run:
//!
//! 1. **Vertex-vertex**: every vertex of this collider against every vertex
//!    of the other. A pair closer than `epsilon` is a shared corner; it is a
//!    penetration if the two polygons overlap by more than `epsilon`, and a
//!    collision otherwise.
//! 2. **Vertex-edge**: every vertex of the other collider against every edge
//!    of this one. A vertex deeper than `epsilon` behind all edges is a
//!    penetration; a vertex within `epsilon` of an edge (and within its
//!    extent) is a collision, or a penetration when the polygons overlap by
//!    more than `epsilon`.
//!
//! The pair status is the stronger of the two phase results:
//! `Penetration > Collision > None`.

use flatland_math::{Vec2, Vec3};

use crate::collider::PlacedCollider;
use crate::geometry::{edges, overlap_depth, signed_edge_distance, within_edge_extent};
use crate::world::ObjectKey;

/// Relationship between two colliders
///
/// Variants are ordered by strength, so `max` combines statuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactStatus {
    /// No interaction
    #[default]
    None,
    /// Touching, within the epsilon band
    Collision,
    /// Overlapping beyond the tolerance
    Penetration,
}

impl ContactStatus {
    /// Combine two results; the stronger one wins
    #[inline]
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether the colliders interact at all
    #[inline]
    pub fn is_touching(self) -> bool {
        self != ContactStatus::None
    }
}

/// A classified collider pair handed to the contact manager
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Owner of the collider that generated the contact
    pub a: ObjectKey,
    /// Owner of the other collider
    pub b: ObjectKey,
    pub status: ContactStatus,
    /// True if either collider is a sensor (detect only, no blocking)
    pub sensor: bool,
}

/// Receiver of classified contacts
///
/// Resolution is up to the implementor; the collision core only reports.
pub trait ContactManager {
    fn on_contact(&mut self, contact: &Contact);
}

/// Contact manager that records every contact it receives
#[derive(Clone, Debug, Default)]
pub struct ContactLog {
    contacts: Vec<Contact>,
}

impl ContactLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded contacts, oldest first
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of recorded contacts with the given status
    pub fn count(&self, status: ContactStatus) -> usize {
        self.contacts.iter().filter(|c| c.status == status).count()
    }

    /// Most recent status reported for the pair, in either order
    pub fn latest(&self, a: ObjectKey, b: ObjectKey) -> Option<ContactStatus> {
        self.contacts
            .iter()
            .rev()
            .find(|c| (c.a == a && c.b == b) || (c.a == b && c.b == a))
            .map(|c| c.status)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}

impl ContactManager for ContactLog {
    fn on_contact(&mut self, contact: &Contact) {
        self.contacts.push(*contact);
    }
}

/// Vertex-vertex phase: look for corners of the two polygons that coincide
pub fn vertex_vertex(vertices: &[Vec2], other: &[Vec2], epsilon: f32) -> ContactStatus {
    let shared_corner = vertices
        .iter()
        .any(|v| other.iter().any(|w| v.distance(*w) <= epsilon));

    if !shared_corner {
        return ContactStatus::None;
    }

    if overlap_depth(vertices, other) > epsilon {
        ContactStatus::Penetration
    } else {
        ContactStatus::Collision
    }
}

/// Vertex-edge phase: test each vertex of `other` against each edge of the
/// counter-clockwise polygon `vertices`
pub fn vertex_edge(vertices: &[Vec2], other: &[Vec2], epsilon: f32) -> ContactStatus {
    if vertices.len() < 3 {
        return ContactStatus::None;
    }

    let mut status = ContactStatus::None;

    for &point in other {
        let inside = edges(vertices).all(|(a, b)| signed_edge_distance(point, a, b) < -epsilon);
        if inside {
            return ContactStatus::Penetration;
        }

        let on_edge = edges(vertices).any(|(a, b)| {
            signed_edge_distance(point, a, b).abs() <= epsilon && within_edge_extent(point, a, b, epsilon)
        });
        if on_edge {
            status = ContactStatus::Collision;
        }
    }

    // A vertex on a collinear edge can still belong to a deep overlap
    if status == ContactStatus::Collision && overlap_depth(vertices, other) > epsilon {
        return ContactStatus::Penetration;
    }

    status
}

impl<'a> PlacedCollider<'a> {
    /// Classify this collider against `other` and report it to `manager`
    ///
    /// `vertices` is this collider's test geometry for the current step
    /// (normally [`PlacedCollider::vertices`]).
    pub fn generate_contacts(
        &self,
        vertices: &[Vec3],
        other: &PlacedCollider<'_>,
        epsilon: f32,
        manager: &mut dyn ContactManager,
    ) -> ContactStatus {
        let this_polygon: Vec<Vec2> = vertices.iter().map(|v| v.xy()).collect();
        let other_polygon: Vec<Vec2> = other.vertices().iter().map(|v| v.xy()).collect();

        let corners = vertex_vertex(&this_polygon, &other_polygon, epsilon);
        let sides = vertex_edge(&this_polygon, &other_polygon, epsilon);
        let status = corners.combine(sides);

        log::trace!(
            "contact {:?} -> {:?}: vertex-vertex {:?}, vertex-edge {:?} => {:?}",
            self.owner, other.owner, corners, sides, status
        );

        manager.on_contact(&Contact {
            a: self.owner,
            b: other.owner,
            status,
            sensor: self.is_sensor() || other.is_sensor(),
        });

        status
    }
}
