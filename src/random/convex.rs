use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::check_bound;
use crate::error::{GeometryError, Result};
use crate::math::hull::convex_hull;
use crate::math::{Point2, Vector2};
use crate::polygon::{Polygon2d, Ring};

const MAX_DRAWS: usize = 64;

/// Draws a random convex polygon with coordinates in `[-coordinate_bound, coordinate_bound]`.
///
/// Uses Valtr's construction: two sorted coordinate samples are split into
/// random chains, their difference vectors paired up, sorted by angle and
/// laid end to end. The convex hull of the result is returned, so the
/// polygon is strictly convex and counter-clockwise but may have fewer
/// vertices than `vertex_count_hint` (never fewer than 3). Hints below 3
/// are raised to 3.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`](crate::error::OperationError::InvalidInput)
/// if `coordinate_bound` is not positive and finite, and a
/// [`GeometryError::Degenerate`] if the random source keeps producing
/// collinear samples.
pub fn random_convex_polygon<R>(vertex_count_hint: usize, coordinate_bound: f64, rng: &mut R) -> Result<Polygon2d>
where
    R: Rng + ?Sized,
{
    check_bound(coordinate_bound)?;
    let n = vertex_count_hint.max(3);

    for draw in 0..MAX_DRAWS {
        let hull = convex_hull(&valtr_points(n, coordinate_bound, rng));
        if hull.len() >= 3 {
            return Ok(Polygon2d::from(Ring::new(hull)));
        }
        trace!(draw, "collinear sample, drawing again");
    }
    Err(GeometryError::Degenerate(format!("no convex polygon after {MAX_DRAWS} draws")).into())
}

/// `n` points in convex position, bounding box inside `[-bound, bound]²`.
fn valtr_points<R>(n: usize, bound: f64, rng: &mut R) -> Vec<Point2>
where
    R: Rng + ?Sized,
{
    let xs = sorted_sample(n, bound, rng);
    let ys = sorted_sample(n, bound, rng);

    let dx = chain_steps(&xs, rng);
    let mut dy = chain_steps(&ys, rng);
    dy.shuffle(rng);

    let mut steps: Vec<Vector2> = dx.into_iter().zip(dy).map(|(x, y)| Vector2::new(x, y)).collect();
    steps.sort_by(|a, b| a.y.atan2(a.x).partial_cmp(&b.y.atan2(b.x)).unwrap_or(Ordering::Equal));

    // Walk the steps, then translate so the walk's lower-left corner sits at
    // the smallest sampled coordinates.
    let mut cursor = Vector2::zeros();
    let mut lowest = Vector2::zeros();
    let mut points = Vec::with_capacity(n);
    for step in steps {
        points.push(Point2::from(cursor));
        cursor += step;
        lowest = lowest.inf(&cursor);
    }
    let shift = Vector2::new(xs[0], ys[0]) - lowest;
    points.iter_mut().for_each(|p| *p += shift);
    points
}

fn sorted_sample<R>(n: usize, bound: f64, rng: &mut R) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let mut values: Vec<f64> = (0..n).map(|_| rng.gen_range(-bound..=bound)).collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Splits the interior values into two monotone chains from the minimum to
/// the maximum and returns the signed steps of both; they sum to zero.
fn chain_steps<R>(sorted: &[f64], rng: &mut R) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    let mut steps = Vec::with_capacity(sorted.len());
    let (mut forward, mut backward) = (min, min);
    for &v in &sorted[1..sorted.len() - 1] {
        if rng.gen_bool(0.5) {
            steps.push(v - forward);
            forward = v;
        } else {
            steps.push(backward - v);
            backward = v;
        }
    }
    steps.push(max - forward);
    steps.push(backward - max);
    steps
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn polygons_are_convex_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for hint in 3..12 {
            for _ in 0..50 {
                let polygon = random_convex_polygon(hint, 1000.0, &mut rng).unwrap();
                let outer = polygon.outer();
                assert!(outer.len() >= 3 && outer.len() <= hint);
                assert!(outer.is_ccw());
                assert!(polygon.is_convex());
                assert!(outer.points().iter().all(|p| p.x.abs() <= 1000.0 && p.y.abs() <= 1000.0));
            }
        }
    }

    #[test]
    fn small_hint_is_raised_to_a_triangle() {
        let mut rng = StdRng::seed_from_u64(1);
        let polygon = random_convex_polygon(0, 10.0, &mut rng).unwrap();
        assert_eq!(polygon.outer().len(), 3);
    }

    #[test]
    fn same_seed_same_polygon() {
        let a = random_convex_polygon(8, 50.0, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = random_convex_polygon(8, 50.0, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn chain_steps_close_the_walk() {
        let mut rng = StdRng::seed_from_u64(3);
        let values = [-4.0, -1.0, 0.5, 2.0, 3.0];
        let steps = chain_steps(&values, &mut rng);
        assert_eq!(steps.len(), values.len());
        assert!(steps.iter().sum::<f64>().abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_convex_polygon(5, 0.0, &mut rng).is_err());
        assert!(random_convex_polygon(5, f64::NAN, &mut rng).is_err());
    }

    proptest! {
        #[test]
        fn generated_polygons_are_valid(seed in any::<u64>(), hint in 0usize..16, bound in 1e-3f64..1e4) {
            let mut rng = StdRng::seed_from_u64(seed);
            let polygon = random_convex_polygon(hint, bound, &mut rng).unwrap();
            prop_assert!(polygon.outer().len() >= 3);
            prop_assert!(polygon.is_convex());
            prop_assert!(polygon.outer().is_ccw());
        }
    }
}
