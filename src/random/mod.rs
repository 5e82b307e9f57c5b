mod concave;
mod convex;

pub use concave::{random_concave_polygon, random_concave_polygon_with, ConcaveParams};
pub use convex::random_convex_polygon;

use crate::error::{OperationError, Result};

/// Rejects coordinate bounds that cannot span a polygon.
fn check_bound(coordinate_bound: f64) -> Result<()> {
    if coordinate_bound.is_finite() && coordinate_bound > 0.0 {
        Ok(())
    } else {
        Err(OperationError::InvalidInput(format!(
            "coordinate bound must be positive and finite, got {coordinate_bound}"
        ))
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intersection::{test_intersection, ConvexIntersection, Gjk, Sat};
    use crate::polygon::Polygon2d;
    use crate::triangulation::triangulate;
    use geo::Intersects;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn to_geo(polygon: &Polygon2d) -> geo::Polygon<f64> {
        let exterior: Vec<(f64, f64)> = polygon.outer().points().iter().map(|p| (p.x, p.y)).collect();
        geo::Polygon::new(geo::LineString::from(exterior), Vec::new())
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        for bound in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(check_bound(bound).is_err(), "bound {bound} accepted");
        }
        assert!(check_bound(1e-3).is_ok());
    }

    #[test]
    fn convex_tests_agree_with_reference() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for vertices in 3..10 {
            let polygons: Vec<Polygon2d> = (0..25)
                .map(|_| random_convex_polygon(vertices, 1000.0, &mut rng).unwrap())
                .collect();
            let reference: Vec<geo::Polygon<f64>> = polygons.iter().map(to_geo).collect();

            for (i, a) in polygons.iter().enumerate() {
                for (j, b) in polygons.iter().enumerate() {
                    let expected = reference[i].intersects(&reference[j]);
                    assert_eq!(Gjk::default().intersects_polygons(a, b), expected, "gjk {vertices}: {i} vs {j}");
                    assert_eq!(Sat.intersects_polygons(a, b), expected, "sat {vertices}: {i} vs {j}");
                }
            }
        }
    }

    #[test]
    fn concave_tests_agree_with_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        for vertices in 4..10 {
            let polygons: Vec<Polygon2d> = (0..20)
                .filter_map(|_| random_concave_polygon(vertices, 1000.0, &mut rng).unwrap())
                .collect();
            let triangulations: Vec<_> = polygons.iter().map(|p| triangulate(p).unwrap()).collect();
            let reference: Vec<geo::Polygon<f64>> = polygons.iter().map(to_geo).collect();

            for i in 0..polygons.len() {
                for j in 0..polygons.len() {
                    let expected = reference[i].intersects(&reference[j]);
                    let gjk = test_intersection(&triangulations[i], &triangulations[j], &Gjk::default());
                    let sat = test_intersection(&triangulations[i], &triangulations[j], &Sat);
                    assert_eq!(gjk, expected, "gjk {vertices}: {i} vs {j}");
                    assert_eq!(sat, expected, "sat {vertices}: {i} vs {j}");
                }
            }
        }
    }
}
