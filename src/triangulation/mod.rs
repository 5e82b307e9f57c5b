mod bridge;
mod ear_clip;

use tracing::debug;

use crate::error::{Result, TriangulationError};
use crate::math::{Point2, TOLERANCE};
use crate::polygon::{Polygon2d, Ring, Triangle};

/// Decomposes a simple polygon, possibly concave and with holes, into
/// counter-clockwise triangles.
///
/// Holes are spliced into the outer boundary through zero-width bridges,
/// then the resulting ring is ear-clipped.
///
/// The triangles cover the outer ring minus all holes. A hole-free ring of
/// `n` vertices yields `n - 2` triangles; `h` holes with `m` vertices in
/// total add `m + 2h`.
pub struct Triangulate<'a> {
    polygon: &'a Polygon2d,
}

impl<'a> Triangulate<'a> {
    #[must_use]
    pub fn new(polygon: &'a Polygon2d) -> Self {
        Self { polygon }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns a [`TriangulationError`] if the outer ring has fewer than three
    /// distinct vertices, if any ring has no area, if a hole cannot be
    /// bridged, or if no ear can be found (self-intersecting input).
    pub fn execute(&self) -> Result<Vec<Triangle>> {
        let polygon = self.polygon.corrected();

        let outer = polygon.outer();
        if outer.len() < 3 {
            return Err(TriangulationError::TooFewVertices { count: outer.len() }.into());
        }
        if is_flat(outer) {
            return Err(TriangulationError::DegenerateInput("outer ring has no area".into()).into());
        }

        let mut holes = Vec::new();
        let mut hole_vertices = 0;
        for (index, inner) in polygon.inners().iter().enumerate() {
            if inner.is_empty() {
                continue;
            }
            if inner.len() < 3 || is_flat(inner) {
                return Err(TriangulationError::DegenerateInput(format!("hole {index} has no area")).into());
            }
            hole_vertices += inner.len();
            holes.push((index, inner.points().to_vec()));
        }
        let hole_count = holes.len();

        let ring = bridge::bridge_holes(outer.points().to_vec(), holes)?;
        let triangles = ear_clip::ear_clip(&ring)?;

        debug!(
            outer_vertices = outer.len(),
            holes = hole_count,
            hole_vertices,
            triangles = triangles.len(),
            "triangulated polygon"
        );
        Ok(triangles)
    }
}

/// Triangulates `polygon`; shorthand for [`Triangulate::execute`].
///
/// # Errors
///
/// See [`Triangulate::execute`].
pub fn triangulate(polygon: &Polygon2d) -> Result<Vec<Triangle>> {
    Triangulate::new(polygon).execute()
}

/// Area below the tolerance relative to the ring's extent.
fn is_flat(ring: &Ring) -> bool {
    let extent = extent(ring.points());
    ring.area() <= TOLERANCE * extent * extent
}

fn extent(points: &[Point2]) -> f64 {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (max_x - min_x).max(max_y - min_y)
}
