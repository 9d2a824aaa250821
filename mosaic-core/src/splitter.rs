//! Bisection of a single polygon along a line through its centroid.
//!
//! The splitter walks the polygon once, sorting each vertex to one side of
//! the cutting line and inserting the crossing point into *both* halves
//! whenever an edge changes side. For a convex input this yields two convex
//! halves that share the cut edge.
//!
//! A rejected split is not an error: [`split_along`] returns `None` and the
//! caller keeps the input polygon as-is.

use crate::{
    geometry::{centroid, lerp},
    types::Polygon,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

/// Smallest vertex count worth bisecting. Triangles are never split.
pub const MIN_SPLIT_VERTICES: usize = 4;

/// Signed side of `point` relative to the line through `origin` with
/// direction `dir`.
///
/// This is the 2D cross product `(point - origin) × dir`. Values `>= 0` put
/// the point on the first half of a split, negative values on the second.
#[inline]
pub fn side_of(point: Vec2, origin: Vec2, dir: Vec2) -> f32 {
    let rel = point - origin;
    rel.x * dir.y - rel.y * dir.x
}

/// Splits `polygon` along a random line through its centroid.
///
/// The cutting direction is drawn uniformly from `[0, π)`; every line
/// orientation is reachable exactly once in that range.
///
/// ### Parameters
/// - `polygon` - Convex polygon to bisect.
/// - `rng` - Uniform random source for the cutting angle.
///
/// ### Returns
/// - `Some((a, b))` with both halves having at least three vertices.
/// - `None` if the polygon is a triangle (or smaller) or the cut
///   degenerates; the caller should keep `polygon` unchanged.
pub fn split(polygon: &[Vec2], rng: &mut impl Rng) -> Option<(Polygon, Polygon)> {
    if polygon.len() < MIN_SPLIT_VERTICES {
        return None;
    }
    let angle = rng.random::<f32>() * PI;
    split_along(polygon, angle)
}

/// Splits `polygon` along the line through its centroid with direction
/// `(cos angle, sin angle)`.
///
/// Vertex order is preserved within each half, so both halves are closed
/// edge-connected loops. Crossing points are computed by interpolating the
/// crossed edge at `|s0| / (|s0| + |s1|)`, where `s0`, `s1` are the signed
/// sides of its endpoints.
///
/// See [`split`] for the meaning of the return value.
pub fn split_along(polygon: &[Vec2], angle: f32) -> Option<(Polygon, Polygon)> {
    let n = polygon.len();
    if n < MIN_SPLIT_VERTICES {
        return None;
    }

    let dir = Vec2::from_angle(angle);
    let center = centroid(polygon);
    let sides: Vec<f32> = polygon.iter().map(|&p| side_of(p, center, dir)).collect();

    // Convex inputs produce exactly two crossings.
    let mut front = Vec::with_capacity(n + 2);
    let mut back = Vec::with_capacity(n + 2);

    for i in 0..n {
        let j = (i + 1) % n;
        let (curr, next) = (polygon[i], polygon[j]);
        let (s_curr, s_next) = (sides[i], sides[j]);

        if s_curr >= 0.0 {
            front.push(curr);
        } else {
            back.push(curr);
        }

        if s_curr * s_next < 0.0 {
            let ratio = s_curr.abs() / (s_curr.abs() + s_next.abs());
            let crossing = lerp(curr, next, ratio);
            front.push(crossing);
            back.push(crossing);
        }
    }

    if front.len() >= 3 && back.len() >= 3 {
        Some((front, back))
    } else {
        None
    }
}
