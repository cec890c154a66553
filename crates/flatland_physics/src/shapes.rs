//! Collision shapes
//!
//! Shapes hold only their local dimensions. Every world-space query takes the
//! owner's current center and derives the bounding geometry from it, so a
//! moved owner can never be tested against stale corners.

use std::fmt;

use flatland_math::{Vec2, Vec3};
use crate::geometry::test_rectangle_point;

/// The kind of a collision shape, used for dispatch and error reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Box => write!(f, "box"),
            ShapeKind::Circle => write!(f, "circle"),
        }
    }
}

/// World-space corners of an axis-aligned rectangle
///
/// Corner order is left-top, left-bottom, right-bottom, right-top, which is
/// counter-clockwise in a y-up frame. The z component of every corner is the
/// owner's depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub lt: Vec3,
    pub lb: Vec3,
    pub rb: Vec3,
    pub rt: Vec3,
}

impl BoundingBox {
    /// Build the box of the given size centered at `center`
    pub fn from_center(center: Vec3, width: f32, height: f32) -> Self {
        let lt = Vec3::new(center.x - width / 2.0, center.y + height / 2.0, center.z);
        let lb = Vec3::new(lt.x, lt.y - height, center.z);
        let rb = Vec3::new(lt.x + width, lt.y - height, center.z);
        let rt = Vec3::new(lt.x + width, lt.y, center.z);
        Self { lt, lb, rb, rt }
    }

    /// The four corners in `lt, lb, rb, rt` order
    pub fn corners(&self) -> [Vec3; 4] {
        [self.lt, self.lb, self.rb, self.rt]
    }

    pub fn width(&self) -> f32 {
        self.rt.x - self.lt.x
    }

    pub fn height(&self) -> f32 {
        self.lt.y - self.lb.y
    }

    /// Check if a point lies in the box grown by `epsilon`
    pub fn contains(&self, point: Vec2, epsilon: f32) -> bool {
        test_rectangle_point(self.lt.xy(), self.width(), self.height(), point, epsilon)
    }
}

/// The four axis directions around `center`: left, up, right, down
///
/// Each direction is sampled as a unit offset from the center minus the center.
pub fn axis_normals(center: Vec3) -> [Vec2; 4] {
    let c = center.xy();
    let offsets = [
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, -1.0),
    ];
    offsets.map(|offset| ((c + offset) - c).normalized())
}

/// An axis-aligned box collider
///
/// The box uses its own bounding box as its test geometry, so every
/// box test reduces to an axis-aligned rectangle test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    /// Create a new box collider with the given full width and height
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half-extents of the box
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// World-space bounding box around `center`
    pub fn bounding_box(&self, center: Vec3) -> BoundingBox {
        BoundingBox::from_center(center, self.width, self.height)
    }

    /// Test geometry of the box: its bounding box corners
    pub fn vertices(&self, center: Vec3) -> [Vec3; 4] {
        self.bounding_box(center).corners()
    }

    /// Radius of the circle through the corners (half the diagonal)
    pub fn radius(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt() / 2.0
    }

    /// Axis directions in order left, up, right, down
    pub fn normals(&self, center: Vec3) -> [Vec2; 4] {
        axis_normals(center)
    }

    /// Check if a point lies inside the box (boundary inclusive)
    pub fn test_point(&self, center: Vec3, point: Vec2) -> bool {
        self.bounding_box(center).contains(point, 0.0)
    }

    /// Check if any of `other_vertices` lies inside this box grown by `epsilon`
    ///
    /// Only the other shape's corners are tested against this box, never the
    /// reverse. Two boxes crossing like a plus sign, with no corner of the
    /// other inside this one, are reported as not touching.
    pub fn test_rectangle(&self, center: Vec3, other_vertices: &[Vec3], epsilon: f32) -> bool {
        let bbox = self.bounding_box(center);
        other_vertices.iter().any(|v| bbox.contains(v.xy(), epsilon))
    }
}

/// A circle collider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleCollider {
    pub radius: f32,
}

impl CircleCollider {
    /// Create a new circle collider with the given radius
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// World-space bounding square around `center`
    pub fn bounding_box(&self, center: Vec3) -> BoundingBox {
        BoundingBox::from_center(center, self.radius * 2.0, self.radius * 2.0)
    }

    /// Test geometry of the circle: its bounding square corners
    pub fn vertices(&self, center: Vec3) -> [Vec3; 4] {
        self.bounding_box(center).corners()
    }

    /// Axis directions in order left, up, right, down
    pub fn normals(&self, center: Vec3) -> [Vec2; 4] {
        axis_normals(center)
    }

    /// Check if a point lies inside the circle (boundary inclusive)
    pub fn test_point(&self, center: Vec3, point: Vec2) -> bool {
        center.xy().distance(point) <= self.radius
    }

    /// Check if another circle overlaps this one, with `epsilon` of slack
    pub fn test_circle(&self, center: Vec3, other_center: Vec3, other_radius: f32, epsilon: f32) -> bool {
        center.xy().distance(other_center.xy()) <= self.radius + other_radius + epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_corners() {
        let bbox = BoundingBox::from_center(Vec3::new(1.0, 2.0, 3.0), 4.0, 2.0);
        assert_eq!(bbox.lt, Vec3::new(-1.0, 3.0, 3.0));
        assert_eq!(bbox.lb, Vec3::new(-1.0, 1.0, 3.0));
        assert_eq!(bbox.rb, Vec3::new(3.0, 1.0, 3.0));
        assert_eq!(bbox.rt, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(bbox.width(), 4.0);
        assert_eq!(bbox.height(), 2.0);
    }

    #[test]
    fn test_bounding_box_follows_center() {
        let collider = BoxCollider::new(2.0, 2.0);
        let before = collider.bounding_box(Vec3::ZERO);
        let after = collider.bounding_box(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(before.lt, Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(after.lt, Vec3::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn test_vertices_are_bounding_box() {
        let collider = BoxCollider::new(2.0, 4.0);
        let center = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(collider.vertices(center), collider.bounding_box(center).corners());
    }

    #[test]
    fn test_box_radius() {
        for (w, h) in [(2.0_f32, 2.0_f32), (3.0, 4.0), (10.0, 0.5), (0.0, 7.0)] {
            let collider = BoxCollider::new(w, h);
            let expected = (w * w + h * h).sqrt() / 2.0;
            assert!((collider.radius() - expected).abs() < 1e-6);
        }
        assert_eq!(BoxCollider::new(3.0, 4.0).radius(), 2.5);
    }

    #[test]
    fn test_box_normals_order_and_length() {
        let expected = [
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ];
        let centers = [Vec3::ZERO, Vec3::new(123.25, -40.5, 2.0), Vec3::new(-7.0, 3.0, 0.0)];

        for (w, h) in [(1.0, 1.0), (20.0, 0.5)] {
            let collider = BoxCollider::new(w, h);
            for center in centers {
                let normals = collider.normals(center);
                assert_eq!(normals.len(), 4);
                for (n, e) in normals.iter().zip(expected.iter()) {
                    assert!((n.length() - 1.0).abs() < 1e-6);
                    assert_eq!(n, e);
                }
            }
        }
    }

    #[test]
    fn test_box_point_inside_and_outside() {
        let collider = BoxCollider::new(2.0, 2.0);
        let center = Vec3::new(3.0, 3.0, 0.0);

        assert!(collider.test_point(center, Vec2::new(3.0, 3.0)));
        assert!(collider.test_point(center, Vec2::new(2.5, 3.9)));
        assert!(!collider.test_point(center, Vec2::new(4.5, 3.0)));
        assert!(!collider.test_point(center, Vec2::new(3.0, 1.9)));
    }

    #[test]
    fn test_box_point_boundary_inclusive() {
        let collider = BoxCollider::new(2.0, 2.0);
        assert!(collider.test_point(Vec3::ZERO, Vec2::new(1.0, 1.0)));
        assert!(collider.test_point(Vec3::ZERO, Vec2::new(-1.0, 0.0)));
        assert!(collider.test_point(Vec3::ZERO, Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_box_rectangle_overlapping_corners() {
        let a = BoxCollider::new(2.0, 2.0);
        let b = BoxCollider::new(2.0, 2.0);
        let b_vertices = b.vertices(Vec3::new(1.0, 1.0, 0.0));

        // B's bottom-left corner (0, 0) lies inside A
        assert_eq!(b_vertices[1], Vec3::new(0.0, 0.0, 0.0));
        assert!(a.test_rectangle(Vec3::ZERO, &b_vertices, 0.0));
    }

    #[test]
    fn test_box_rectangle_disjoint() {
        let a = BoxCollider::new(2.0, 2.0);
        let b = BoxCollider::new(2.0, 2.0);
        let b_vertices = b.vertices(Vec3::new(10.0, 10.0, 0.0));

        assert!(!a.test_rectangle(Vec3::ZERO, &b_vertices, 0.0));
        // Widening the band far enough catches the other box
        assert!(a.test_rectangle(Vec3::ZERO, &b_vertices, 100.0));
    }

    #[test]
    fn test_box_rectangle_crossing_boxes_missed() {
        // Known limitation: a wide flat box crossing a tall thin box has no
        // corner inside the other, so the corner test reports no contact.
        let wide = BoxCollider::new(10.0, 1.0);
        let tall = BoxCollider::new(1.0, 10.0);

        let tall_vertices = tall.vertices(Vec3::ZERO);
        let wide_vertices = wide.vertices(Vec3::ZERO);

        assert!(!wide.test_rectangle(Vec3::ZERO, &tall_vertices, 0.0));
        assert!(!tall.test_rectangle(Vec3::ZERO, &wide_vertices, 0.0));
    }

    #[test]
    fn test_box_rectangle_is_asymmetric() {
        // A small box fully inside a big one: the big box sees the small
        // box's corners, the small box sees none of the big box's corners.
        let big = BoxCollider::new(10.0, 10.0);
        let small = BoxCollider::new(1.0, 1.0);

        assert!(big.test_rectangle(Vec3::ZERO, &small.vertices(Vec3::ZERO), 0.0));
        assert!(!small.test_rectangle(Vec3::ZERO, &big.vertices(Vec3::ZERO), 0.0));
    }

    #[test]
    fn test_circle_queries() {
        let circle = CircleCollider::new(1.0);
        let center = Vec3::new(2.0, 0.0, 0.0);

        assert_eq!(circle.radius(), 1.0);
        assert_eq!(circle.bounding_box(center).lt, Vec3::new(1.0, 1.0, 0.0));
        assert!(circle.test_point(center, Vec2::new(2.5, 0.5)));
        assert!(!circle.test_point(center, Vec2::new(2.9, 0.9)));
    }

    #[test]
    fn test_circle_vs_circle() {
        let a = CircleCollider::new(1.0);
        assert!(a.test_circle(Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0), 1.0, 0.0));
        assert!(a.test_circle(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 1.0, 0.0));
        assert!(!a.test_circle(Vec3::ZERO, Vec3::new(2.5, 0.0, 0.0), 1.0, 0.0));
        assert!(a.test_circle(Vec3::ZERO, Vec3::new(2.5, 0.0, 0.0), 1.0, 0.5));
    }
}
