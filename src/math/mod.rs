pub mod curvature;
pub mod hull;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Z-component of the 3D cross product of two planar vectors.
#[must_use]
#[inline]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `c` lies to the left of `a → b` (counter-clockwise turn),
/// negative to the right, exactly zero when collinear.
#[must_use]
#[inline]
pub fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
