use super::{open_ring, ConvexIntersection};
use crate::math::polygon_2d::right_normal;
use crate::math::{Point2, Vector2};
use crate::polygon::Polygon2d;

/// Separating axis test for convex polygons.
///
/// Every edge normal of both polygons is a candidate axis. Projections are
/// taken relative to the edge's start point, so vertices lying on the edge's
/// line project to exactly zero and a shared edge or vertex yields touching
/// intervals, which count as separated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sat;

impl ConvexIntersection for Sat {
    fn intersects(&self, a: &[Point2], b: &[Point2]) -> bool {
        let a = open_ring(a);
        let b = open_ring(b);
        if a.len() < 3 || b.len() < 3 {
            return false;
        }
        !has_separating_edge(a, a, b) && !has_separating_edge(b, a, b)
    }
}

/// Checks the normals of `owner`'s edges for an axis separating `a` from `b`.
fn has_separating_edge(owner: &[Point2], a: &[Point2], b: &[Point2]) -> bool {
    let n = owner.len();
    for i in 0..n {
        let start = owner[i];
        let end = owner[(i + 1) % n];
        let axis = right_normal(end - start);
        if axis.x == 0.0 && axis.y == 0.0 {
            continue;
        }

        let (min_a, max_a) = project(a, &start, &axis);
        let (min_b, max_b) = project(b, &start, &axis);
        if max_a <= min_b || max_b <= min_a {
            return true;
        }
    }
    false
}

/// Projects `points` onto `axis` relative to `origin`, returning `(min, max)`.
fn project(points: &[Point2], origin: &Point2, axis: &Vector2) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let t = (p - origin).dot(axis);
        (lo.min(t), hi.max(t))
    })
}

/// Separating axis test on the outer rings of two convex polygons.
#[must_use]
pub fn sat_intersects(a: &Polygon2d, b: &Polygon2d) -> bool {
    Sat.intersects_polygons(a, b)
}
