use tracing::warn;

use super::{open_ring, ConvexIntersection};
use crate::math::polygon_2d::{left_normal, right_normal, vertex_centroid};
use crate::math::{cross, Point2, Vector2};
use crate::polygon::Polygon2d;

/// Simplex search over the Minkowski difference of two convex polygons.
///
/// The polygons overlap with positive area iff the origin lies in the
/// interior of `A ⊖ B`. The search grows a point/edge/triangle simplex of
/// support points toward the origin and stops as soon as a triangle strictly
/// encloses it, or when a support point fails to pass the origin.
#[derive(Debug, Clone, Copy)]
pub struct Gjk {
    max_iterations: usize,
}

impl Default for Gjk {
    fn default() -> Self {
        Self { max_iterations: 64 }
    }
}

impl Gjk {
    /// Creates a simplex search with the default iteration budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration budget after which the polygons are reported disjoint.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

/// Outcome of one simplex update.
enum Step {
    /// Keep searching along the given direction.
    Search(Vector2),
    /// The origin is strictly inside the Minkowski difference.
    Enclosed,
    /// The origin is outside or on the boundary.
    Separated,
}

/// Up to three support points, newest last.
struct Simplex {
    points: [Vector2; 3],
    len: usize,
}

impl Simplex {
    fn new(first: Vector2) -> Self {
        Self {
            points: [first, Vector2::zeros(), Vector2::zeros()],
            len: 1,
        }
    }

    fn push(&mut self, p: Vector2) {
        self.points[self.len] = p;
        self.len += 1;
    }

    fn set(&mut self, points: &[Vector2]) {
        self.points[..points.len()].copy_from_slice(points);
        self.len = points.len();
    }
}

/// Support point of `A ⊖ B` along `d`.
fn support(a: &[Point2], b: &[Point2], d: &Vector2) -> Vector2 {
    farthest(a, d) - farthest(b, &-d)
}

fn farthest(points: &[Point2], d: &Vector2) -> Vector2 {
    let mut best = points[0].coords;
    let mut best_dot = best.dot(d);
    for p in &points[1..] {
        let dot = p.coords.dot(d);
        if dot > best_dot {
            best = p.coords;
            best_dot = dot;
        }
    }
    best
}

/// Decides whether the origin, lying on a simplex edge with direction `edge`,
/// is interior: `A ⊖ B` must extend strictly beyond the edge's line on both sides.
fn straddles(a: &[Point2], b: &[Point2], edge: Vector2) -> bool {
    let n = left_normal(edge);
    if support(a, b, &n).dot(&n) <= 0.0 {
        return false;
    }
    let m = -n;
    support(a, b, &m).dot(&m) > 0.0
}

/// Edge case: `older` and `newer` span the simplex, `newer` was just added.
fn edge_step(a: &[Point2], b: &[Point2], simplex: &mut Simplex) -> Step {
    let older = simplex.points[0];
    let newer = simplex.points[1];
    let edge = older - newer;
    let to_origin = -newer;
    let along = edge.dot(&to_origin);

    // Origin projects beyond the new point: the old point is the far endpoint.
    if along <= 0.0 {
        simplex.set(&[newer]);
        return Step::Search(to_origin);
    }
    // Origin projects beyond the old point.
    if along >= edge.norm_squared() {
        simplex.set(&[older]);
        return Step::Search(-older);
    }

    let side = cross(&edge, &to_origin);
    if side == 0.0 {
        return if straddles(a, b, edge) {
            Step::Enclosed
        } else {
            Step::Separated
        };
    }
    let direction = if side > 0.0 {
        left_normal(edge)
    } else {
        right_normal(edge)
    };
    Step::Search(direction)
}

/// Triangle case: `first`, `second` are the previous edge, `newest` was just added.
fn triangle_step(a: &[Point2], b: &[Point2], simplex: &mut Simplex) -> Step {
    let [first, second, newest] = simplex.points;
    let to_first = first - newest;
    let to_second = second - newest;
    let to_origin = -newest;

    let winding = cross(&to_second, &to_first);
    if winding == 0.0 {
        simplex.set(&[second, newest]);
        return edge_step(a, b, simplex);
    }

    // Origin strictly on the far side of `newest-second` from `first`.
    let side_second = cross(&to_second, &to_origin);
    if side_second * winding < 0.0 {
        simplex.set(&[second, newest]);
        return edge_step(a, b, simplex);
    }
    // Origin strictly on the far side of `newest-first` from `second`.
    let side_first = cross(&to_first, &to_origin);
    if side_first * winding > 0.0 {
        simplex.set(&[first, newest]);
        return edge_step(a, b, simplex);
    }

    if side_second == 0.0 {
        return straddle_step(a, b, to_second);
    }
    if side_first == 0.0 {
        return straddle_step(a, b, to_first);
    }
    Step::Enclosed
}

fn straddle_step(a: &[Point2], b: &[Point2], edge: Vector2) -> Step {
    if straddles(a, b, edge) {
        Step::Enclosed
    } else {
        Step::Separated
    }
}

impl ConvexIntersection for Gjk {
    fn intersects(&self, a: &[Point2], b: &[Point2]) -> bool {
        let a = open_ring(a);
        let b = open_ring(b);
        if a.len() < 3 || b.len() < 3 {
            return false;
        }

        let mut direction = vertex_centroid(a) - vertex_centroid(b);
        if direction == Vector2::zeros() {
            direction = Vector2::x();
        }

        let first = support(a, b, &direction);
        if first == Vector2::zeros() {
            // A support point is extremal, so the origin is on the boundary.
            return false;
        }
        let mut simplex = Simplex::new(first);
        direction = -first;

        for _ in 0..self.max_iterations {
            let p = support(a, b, &direction);
            if p.dot(&direction) <= 0.0 {
                return false;
            }
            simplex.push(p);

            let step = match simplex.len {
                2 => edge_step(a, b, &mut simplex),
                _ => triangle_step(a, b, &mut simplex),
            };
            match step {
                Step::Search(next) => direction = next,
                Step::Enclosed => return true,
                Step::Separated => return false,
            }
        }

        warn!(
            max_iterations = self.max_iterations,
            a_vertices = a.len(),
            b_vertices = b.len(),
            "simplex search exhausted its iteration budget, reporting no intersection"
        );
        false
    }
}

/// Simplex-search test on the outer rings of two convex polygons.
#[must_use]
pub fn intersects_convex(a: &Polygon2d, b: &Polygon2d) -> bool {
    Gjk::default().intersects_polygons(a, b)
}
