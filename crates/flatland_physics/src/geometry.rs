//! Planar geometry tests
//!
//! All rectangles are axis aligned and anchored at their top-left corner in a
//! y-up frame, so a rectangle of `width` x `height` at `top_left` spans
//! `[tl.x, tl.x + width]` horizontally and `[tl.y - height, tl.y]` vertically.
//!
//! Polygon helpers expect convex polygons wound counter-clockwise.

use flatland_math::Vec2;

/// Test whether `point` lies in the rectangle at `top_left`, grown by `epsilon`
///
/// Bounds are inclusive. A positive `epsilon` widens the rectangle on every
/// side (the proximity band), zero is exact containment, and a negative
/// `epsilon` shrinks it.
pub fn test_rectangle_point(top_left: Vec2, width: f32, height: f32, point: Vec2, epsilon: f32) -> bool {
    let left = top_left.x - epsilon;
    let right = top_left.x + width + epsilon;
    let top = top_left.y + epsilon;
    let bottom = top_left.y - height - epsilon;

    point.x >= left && point.x <= right && point.y >= bottom && point.y <= top
}

/// Outward unit normal of the edge `a -> b` of a counter-clockwise polygon
///
/// Degenerate edges yield the zero vector.
#[inline]
pub fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    (b - a).perp_cw().normalized()
}

/// Signed distance from `point` to the line through `a -> b`
///
/// Positive outside the polygon, negative inside.
#[inline]
pub fn signed_edge_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    (point - a).dot(edge_normal(a, b))
}

/// Whether the projection of `point` onto `a -> b` falls within the edge,
/// extended by `epsilon` at both ends
pub fn within_edge_extent(point: Vec2, a: Vec2, b: Vec2, epsilon: f32) -> bool {
    let edge = b - a;
    let len = edge.length();
    if len <= 0.0 {
        return point.distance(a) <= epsilon;
    }
    let along = (point - a).dot(edge) / len;
    along >= -epsilon && along <= len + epsilon
}

/// Iterate over the edges of a closed polygon as `(start, end)` pairs
pub fn edges(polygon: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Minimum overlap of two convex polygons projected onto every edge normal
/// of both polygons
///
/// Positive values are the shallowest interpenetration depth; zero means the
/// polygons touch; negative values mean a separating axis exists.
pub fn overlap_depth(a: &[Vec2], b: &[Vec2]) -> f32 {
    let mut min_overlap = f32::INFINITY;

    for (start, end) in edges(a).chain(edges(b)) {
        let axis = edge_normal(start, end);
        if axis == Vec2::ZERO {
            continue;
        }

        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        let overlap = max_a.min(max_b) - min_a.max(min_b);

        if overlap < min_overlap {
            min_overlap = overlap;
        }
    }

    if min_overlap.is_finite() {
        min_overlap
    } else {
        0.0
    }
}

fn project(polygon: &[Vec2], axis: Vec2) -> (f32, f32) {
    polygon.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
        let d = p.dot(axis);
        (lo.min(d), hi.max(d))
    })
}
