//! Small geometric helpers shared by the splitter, the subdivision driver
//! and the animation model.

use crate::types::Polygon;
use glam::Vec2;
use std::f32::consts::TAU;

/// Returns the arithmetic mean of all vertices of `polygon`.
///
/// This is the vertex centroid, not the area centroid; for the convex
/// fragments produced by subdivision both lie inside the polygon, which is
/// all the splitter needs.
///
/// ### Parameters
/// - `polygon` - Vertices to average. Must be non-empty.
///
/// ### Returns
/// The mean position. An empty slice yields `NaN` components.
pub fn centroid(polygon: &[Vec2]) -> Vec2 {
    let sum: Vec2 = polygon.iter().copied().sum();
    sum / polygon.len() as f32
}

/// Returns the length of the longest edge of `polygon`, including the
/// closing edge from the last vertex to the first.
///
/// Polygons with fewer than two vertices have no edges and yield `0.0`.
pub fn longest_edge_length(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 2 {
        return 0.0;
    }

    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.distance(*b))
        .fold(0.0, f32::max)
}

/// Linearly interpolates between `a` and `b`; `t = 0` gives `a`, `t = 1`
/// gives `b`.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Absolute shoelace area of `polygon`. Degenerate polygons (fewer than
/// three vertices) have zero area.
pub fn area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let twice: f32 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    twice.abs() * 0.5
}

/// Builds a regular polygon with `sides` vertices on a circle of `radius`
/// around `center`, counter-clockwise starting at angle zero.
pub fn regular_polygon(center: Vec2, radius: f32, sides: usize) -> Polygon {
    (0..sides)
        .map(|i| {
            let angle = i as f32 / sides as f32 * TAU;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// Axis-aligned square with its first corner at `origin`, ordered
/// `(0,0) (s,0) (s,s) (0,s)` relative to it.
pub fn square(origin: Vec2, size: f32) -> Polygon {
    vec![
        origin,
        origin + Vec2::new(size, 0.0),
        origin + Vec2::new(size, size),
        origin + Vec2::new(0.0, size),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn centroid_of_regular_polygon_is_its_center() {
        let center = Vec2::new(3.0, -7.5);
        for sides in [3, 4, 5, 8, 13] {
            let poly = regular_polygon(center, 12.0, sides);
            let c = centroid(&poly);
            assert!(
                (c - center).length() < EPS,
                "sides={sides}: centroid {c:?} != {center:?}"
            );
        }
    }

    #[test]
    fn centroid_of_empty_polygon_is_nan() {
        let c = centroid(&[]);
        assert!(c.x.is_nan() && c.y.is_nan());
    }

    #[test]
    fn longest_edge_includes_closing_edge() {
        // The closing edge (10,0) -> (0,0) is the longest one.
        let poly = vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 3.0), Vec2::new(10.0, 0.0)];
        assert!((longest_edge_length(&poly) - 10.0).abs() < EPS);
    }

    #[test]
    fn longest_edge_of_square() {
        let poly = square(Vec2::ZERO, 10.0);
        assert!((longest_edge_length(&poly) - 10.0).abs() < EPS);
    }

    #[test]
    fn longest_edge_of_single_point_is_zero() {
        assert_eq!(longest_edge_length(&[Vec2::ONE]), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -4.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec2::new(5.0, -2.0));
    }

    #[test]
    fn area_ignores_winding() {
        let ccw = square(Vec2::ZERO, 10.0);
        let mut cw = ccw.clone();
        cw.reverse();
        assert!((area(&ccw) - 100.0).abs() < EPS);
        assert!((area(&cw) - 100.0).abs() < EPS);
        assert_eq!(area(&ccw[..2]), 0.0);
    }
}
