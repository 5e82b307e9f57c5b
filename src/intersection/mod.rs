mod concave;
mod gjk;
mod sat;

pub use concave::{intersects_concave, test_intersection};
pub use gjk::{intersects_convex, Gjk};
pub use sat::{sat_intersects, Sat};

use crate::math::Point2;
use crate::polygon::{Polygon2d, Triangle};

/// A convex-convex overlap test.
///
/// Implementations receive the vertices of two convex polygons (any
/// winding, no closing duplicate required) and report whether their
/// interiors overlap. Contact along a shared edge or at a shared vertex is
/// not an intersection. [`Gjk`] and [`Sat`] give the same answers.
pub trait ConvexIntersection {
    /// Returns `true` if the convex hulls of `a` and `b` overlap with positive area.
    fn intersects(&self, a: &[Point2], b: &[Point2]) -> bool;

    /// Tests the outer rings of two convex polygons.
    fn intersects_polygons(&self, a: &Polygon2d, b: &Polygon2d) -> bool {
        self.intersects(a.outer().points(), b.outer().points())
    }

    /// Tests two triangles.
    fn intersects_triangles(&self, a: &Triangle, b: &Triangle) -> bool {
        self.intersects(a.points(), b.points())
    }
}

impl<T: ConvexIntersection + ?Sized> ConvexIntersection for &T {
    fn intersects(&self, a: &[Point2], b: &[Point2]) -> bool {
        (**self).intersects(a, b)
    }
}

/// Strips a closing vertex equal to the first one.
fn open_ring(points: &[Point2]) -> &[Point2] {
    match points {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &points[..points.len() - 1],
        _ => points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Polygon2d {
        Polygon2d::from_coords(&[(x0, y0), (x0 + size, y0), (x0 + size, y0 + size), (x0, y0 + size)])
    }

    fn verdicts(a: &Polygon2d, b: &Polygon2d) -> (bool, bool) {
        (Gjk::default().intersects_polygons(a, b), Sat.intersects_polygons(a, b))
    }

    #[test]
    fn overlapping_squares() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, 0.5, 1.0);
        assert_eq!(verdicts(&a, &b), (true, true));
    }

    #[test]
    fn squares_sharing_an_edge() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        assert_eq!(verdicts(&a, &b), (false, false));
    }

    #[test]
    fn closing_vertex_is_ignored() {
        let a = Polygon2d::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
        let b = square(1.0, 1.0, 2.0);
        assert_eq!(verdicts(&a, &b), (true, true));
    }

    #[test]
    fn open_ring_strips_duplicate_end() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)];
        assert_eq!(open_ring(&pts).len(), 3);
        assert_eq!(open_ring(&pts[..3]).len(), 3);
    }
}
