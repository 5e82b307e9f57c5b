use super::ConvexIntersection;
use crate::error::Result;
use crate::polygon::{Polygon2d, Triangle};
use crate::triangulation::triangulate;

/// Returns `true` if any triangle of `a` overlaps any triangle of `b`.
///
/// Useful when the triangulations are reused across many queries.
#[must_use]
pub fn test_intersection<C>(a: &[Triangle], b: &[Triangle], convex: &C) -> bool
where
    C: ConvexIntersection + ?Sized,
{
    a.iter()
        .any(|ta| b.iter().any(|tb| convex.intersects_triangles(ta, tb)))
}

/// Overlap test for arbitrary simple polygons, holes included.
///
/// Both polygons are triangulated and the triangles compared pairwise with
/// `convex`. Contact along boundaries does not count as overlap.
///
/// # Errors
///
/// Returns a triangulation error if either polygon is degenerate.
pub fn intersects_concave<C>(a: &Polygon2d, b: &Polygon2d, convex: &C) -> Result<bool>
where
    C: ConvexIntersection + ?Sized,
{
    let triangles_a = triangulate(a)?;
    let triangles_b = triangulate(b)?;
    Ok(test_intersection(&triangles_a, &triangles_b, convex))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intersection::{Gjk, Sat};

    fn verdicts(a: &Polygon2d, b: &Polygon2d) -> (bool, bool) {
        (
            intersects_concave(a, b, &Gjk::default()).unwrap(),
            intersects_concave(a, b, &Sat).unwrap(),
        )
    }

    fn frame() -> Polygon2d {
        Polygon2d::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
            .with_hole(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)])
    }

    #[test]
    fn polygon_inside_a_hole_does_not_intersect() {
        let inner = Polygon2d::from_coords(&[(1.5, 1.5), (2.5, 1.5), (2.5, 2.5), (1.5, 2.5)]);
        assert_eq!(verdicts(&frame(), &inner), (false, false));
    }

    #[test]
    fn polygon_reaching_out_of_a_hole_intersects() {
        let inner = Polygon2d::from_coords(&[(0.5, 0.5), (2.5, 0.5), (2.5, 2.0), (0.5, 2.0)]);
        assert_eq!(verdicts(&frame(), &inner), (true, true));
    }

    #[test]
    fn concave_quadrilaterals_intersect() {
        let a = Polygon2d::from_coords(&[(4.0, 11.0), (4.0, 5.0), (9.0, 9.0), (2.0, 2.0)]).corrected();
        let b = Polygon2d::from_coords(&[(5.0, 7.0), (7.0, 3.0), (9.0, 6.0), (12.0, 7.0)]).corrected();
        assert_eq!(verdicts(&a, &b), (true, true));
    }

    #[test]
    fn polygons_sharing_an_edge() {
        let a = Polygon2d::from_coords(&[(0.0, 2.0), (2.0, 2.0), (2.0, 0.0), (0.0, 0.0)]);
        let b = Polygon2d::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, -2.0), (0.0, -2.0)]);
        assert_eq!(verdicts(&a, &b), (false, false));
    }

    #[test]
    fn polygons_sharing_a_vertex() {
        let a = Polygon2d::from_coords(&[(0.0, 2.0), (2.0, 2.0), (0.0, 0.0)]);
        let b = Polygon2d::from_coords(&[(4.0, 4.0), (4.0, 2.0), (2.0, 2.0), (2.0, 4.0)]);
        assert_eq!(verdicts(&a, &b), (false, false));
    }

    #[test]
    fn house_notch_does_not_reach_a_polygon_in_it() {
        let house = Polygon2d::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
        let in_notch = Polygon2d::from_coords(&[(1.5, 3.5), (2.0, 3.0), (2.5, 3.5), (2.0, 4.0)]);
        assert_eq!(verdicts(&house, &in_notch), (false, false));
    }

    #[test]
    fn degenerate_polygon_is_an_error() {
        let line = Polygon2d::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let square = Polygon2d::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(intersects_concave(&line, &square, &Sat).is_err());
    }

    #[test]
    fn pairwise_test_over_cached_triangles() {
        let a = triangulate(&frame()).unwrap();
        let b = triangulate(&Polygon2d::from_coords(&[(3.5, 3.5), (5.0, 3.5), (5.0, 5.0)])).unwrap();
        assert!(test_intersection(&a, &b, &Gjk::default()));
        assert!(test_intersection(&a, &b, &Sat));
        assert!(!test_intersection(&a, &[], &Sat));
    }
}
