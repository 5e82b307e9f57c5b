use crate::math::intersect_2d::segments_touch;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{orient, Point2};

/// An implicitly closed sequence of points.
///
/// The last point connects back to the first. A ring is not validated on
/// construction: use [`Ring::is_simple`] and friends to check the invariants
/// the algorithms rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Creates a ring from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the vertices of the ring.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed shoelace area; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if the ring winds counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns a copy with the vertex order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns a copy without consecutive duplicate vertices.
    ///
    /// A closing vertex equal to the first one is removed as well.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        let mut points: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if points.last() != Some(p) {
                points.push(*p);
            }
        }
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }

    /// Indices of the reflex vertices, relative to the ring's own winding.
    ///
    /// Collinear vertices are not reflex.
    #[must_use]
    pub fn reflex_vertices(&self) -> Vec<usize> {
        let n = self.points.len();
        if n < 4 {
            return Vec::new();
        }
        let winding = self.signed_area().signum();
        (0..n)
            .filter(|&i| {
                let prev = &self.points[(i + n - 1) % n];
                let next = &self.points[(i + 1) % n];
                orient(prev, &self.points[i], next) * winding < 0.0
            })
            .collect()
    }

    /// Returns `true` if the ring is simple and no interior angle exceeds 180°.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let ring = self.cleaned();
        let n = ring.points.len();
        if n < 3 {
            return false;
        }
        let mut positive = false;
        let mut negative = false;
        for i in 0..n {
            let o = orient(&ring.points[i], &ring.points[(i + 1) % n], &ring.points[(i + 2) % n]);
            positive |= o > 0.0;
            negative |= o < 0.0;
        }
        positive != negative && ring.is_simple()
    }

    /// Returns `true` if the boundary does not touch or cross itself.
    ///
    /// Adjacent edges may only share their common vertex; rings with fewer
    /// than 3 distinct vertices or no enclosed area are not simple.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let ring = self.cleaned();
        let pts = &ring.points;
        let n = pts.len();
        if n < 3 || ring.signed_area() == 0.0 {
            return false;
        }

        for i in 0..n {
            let a0 = &pts[i];
            let a1 = &pts[(i + 1) % n];
            let a2 = &pts[(i + 2) % n];

            // Adjacent edge folding back onto this one.
            if orient(a0, a1, a2) == 0.0 && (a1 - a0).dot(&(a2 - a1)) < 0.0 {
                return false;
            }

            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let b0 = &pts[j];
                let b1 = &pts[(j + 1) % n];
                if segments_touch(a0, a1, b0, b1) {
                    return false;
                }
            }
        }
        true
    }
}

impl From<Vec<Point2>> for Ring {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2> for Ring {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
