use super::{Polygon2d, Ring};
use crate::math::{orient, Point2};

/// A triangle produced by triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices, in the given order.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns the vertices as a slice, as consumed by the convex tests.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.vertices
    }

    /// Signed area; positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        0.5 * orient(a, b, c)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Converts the triangle into a hole-free polygon.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon2d {
        Polygon2d::new(Ring::new(self.vertices.to_vec()), Vec::new())
    }
}

impl From<Triangle> for Polygon2d {
    fn from(triangle: Triangle) -> Self {
        triangle.to_polygon()
    }
}
