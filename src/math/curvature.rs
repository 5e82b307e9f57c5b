use super::{cross, orient, Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Signed curvature of the circle through `p1`, `p2`, `p3`.
///
/// Positive when the points turn counter-clockwise, negative when they turn
/// clockwise, zero for three distinct collinear points.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if any two points coincide.
pub fn calc_curvature(p1: &Point2, p2: &Point2, p3: &Point2) -> Result<f64> {
    let denominator = (p1 - p2).norm() * (p2 - p3).norm() * (p3 - p1).norm();
    if denominator.abs() < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "curvature needs three distinct points, got ({}, {}), ({}, {}), ({}, {})",
            p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        ))
        .into());
    }
    Ok(2.0 * cross(&(p2 - p1), &(p3 - p1)) / denominator)
}

/// Center of the circle passing through three non-collinear points.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the points are collinear or coincident.
pub fn circumcenter(a: &Point2, b: &Point2, c: &Point2) -> Result<Point2> {
    let d = 2.0 * orient(a, b, c);
    let scale = (b - a).norm_squared().max((c - a).norm_squared());
    if d.abs() <= TOLERANCE * scale.max(1.0) {
        return Err(GeometryError::Degenerate(format!(
            "circumcenter of collinear points ({}, {}), ({}, {}), ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        ))
        .into());
    }

    // Solve relative to `a` to keep magnitudes small.
    let ab = b - a;
    let ac = c - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;
    Ok(Point2::new(a.x + ux, a.y + uy))
}
