use rand::Rng;
use tracing::{debug, trace};

use super::{check_bound, random_convex_polygon};
use crate::error::Result;
use crate::math::polygon_2d::vertex_centroid;
use crate::polygon::{Polygon2d, Ring};

/// Parameters of the concave polygon generator.
#[derive(Debug, Clone, Copy)]
pub struct ConcaveParams {
    /// Convex polygons drawn before giving up.
    pub max_attempts: usize,
    /// Upper bound on the vertices pulled toward the centroid per attempt.
    pub max_dents: usize,
}

impl Default for ConcaveParams {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            max_dents: 3,
        }
    }
}

/// Largest fraction of its distance to the centroid a dented vertex keeps.
const MAX_DENT_SCALE: f64 = 0.8;

/// Draws a random simple polygon with at least one reflex vertex, using
/// [`ConcaveParams::default`].
///
/// Returns `Ok(None)` when no such polygon was found within the attempt
/// budget, and always for hints below 4.
///
/// # Errors
///
/// Returns an error if `coordinate_bound` is not positive and finite.
pub fn random_concave_polygon<R>(
    vertex_count_hint: usize,
    coordinate_bound: f64,
    rng: &mut R,
) -> Result<Option<Polygon2d>>
where
    R: Rng + ?Sized,
{
    random_concave_polygon_with(vertex_count_hint, coordinate_bound, &ConcaveParams::default(), rng)
}

/// Draws a random concave polygon with explicit parameters.
///
/// Each attempt draws a convex polygon and pulls a few random vertices
/// toward its vertex centroid. Vertex angles around the centroid are kept,
/// so the dented ring usually stays simple; it is accepted once it is
/// simple and has a reflex vertex. The result winds counter-clockwise.
///
/// # Errors
///
/// Returns an error if `coordinate_bound` is not positive and finite.
pub fn random_concave_polygon_with<R>(
    vertex_count_hint: usize,
    coordinate_bound: f64,
    params: &ConcaveParams,
    rng: &mut R,
) -> Result<Option<Polygon2d>>
where
    R: Rng + ?Sized,
{
    check_bound(coordinate_bound)?;
    if vertex_count_hint < 4 {
        return Ok(None);
    }

    for attempt in 0..params.max_attempts {
        let convex = random_convex_polygon(vertex_count_hint, coordinate_bound, rng)?;
        let mut points = convex.outer().points().to_vec();
        if points.len() < 4 {
            trace!(attempt, vertices = points.len(), "convex draw too small to dent");
            continue;
        }

        let center = vertex_centroid(&points);
        let dents = rng.gen_range(1..=params.max_dents.max(1));
        for _ in 0..dents {
            let i = rng.gen_range(0..points.len());
            let scale = rng.gen_range(0.0..MAX_DENT_SCALE);
            points[i] = center + (points[i] - center) * scale;
        }

        let ring = Ring::new(points);
        if ring.is_simple() && !ring.reflex_vertices().is_empty() {
            trace!(attempt, dents, vertices = ring.len(), "accepted concave polygon");
            return Ok(Some(Polygon2d::from(ring).corrected()));
        }
        trace!(attempt, dents, "dented ring rejected");
    }

    debug!(
        max_attempts = params.max_attempts,
        vertex_count_hint, "no concave polygon within the attempt budget"
    );
    Ok(None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn polygons_are_simple_and_concave() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut produced = 0;
        for hint in 4..12 {
            for _ in 0..30 {
                let Some(polygon) = random_concave_polygon(hint, 1000.0, &mut rng).unwrap() else {
                    continue;
                };
                produced += 1;
                let outer = polygon.outer();
                assert!(outer.is_ccw());
                assert!(polygon.is_simple());
                assert!(!polygon.is_convex());
                assert!(!outer.reflex_vertices().is_empty());
                assert!(outer.points().iter().all(|p| p.x.abs() <= 1000.0 && p.y.abs() <= 1000.0));
            }
        }
        assert!(produced > 200);
    }

    #[test]
    fn small_hints_give_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        for hint in 0..4 {
            assert!(random_concave_polygon(hint, 10.0, &mut rng).unwrap().is_none());
        }
    }

    #[test]
    fn zero_attempts_give_nothing() {
        let params = ConcaveParams {
            max_attempts: 0,
            ..ConcaveParams::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        assert!(random_concave_polygon_with(8, 10.0, &params, &mut rng).unwrap().is_none());
    }

    #[test]
    fn invalid_bound_is_an_error_even_for_small_hints() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(random_concave_polygon(2, -3.0, &mut rng).is_err());
    }

    proptest! {
        #[test]
        fn returned_polygons_triangulate(seed in any::<u64>(), hint in 4usize..14) {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(polygon) = random_concave_polygon(hint, 100.0, &mut rng).unwrap() {
                let triangles = crate::triangulation::triangulate(&polygon).unwrap();
                prop_assert_eq!(triangles.len(), polygon.outer().len() - 2);
                let area: f64 = triangles.iter().map(crate::polygon::Triangle::area).sum();
                prop_assert!((area - polygon.area()).abs() <= 1e-9 * polygon.area().max(1.0));
            }
        }
    }
}
