use super::{cross, orient, Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallel means an exactly zero determinant.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let det = cross(d1, d2);
    if det == 0.0 {
        return None;
    }
    let d = p2 - p1;
    let t = cross(&d, d2) / det;
    let u = cross(&d, d1) / det;
    Some((t, u))
}

/// Bounded intersection of segments `p1-p2` and `p3-p4`.
///
/// Endpoints are included: a segment touching the other with one of its
/// endpoints yields that point. Parallel, collinear-overlapping and
/// zero-length segments return `None`.
#[must_use]
pub fn segment_intersection(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let (t, u) = line_line_intersect_2d(p1, &d1, p3, &d2)?;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(p1 + d1 * t)
}

/// Returns `true` if the closed segments `a0-a1` and `b0-b1` share any point,
/// including collinear overlap and endpoint contact.
///
/// Uses exact orientation signs, so it is suited to validity checks rather
/// than to computing the intersection point.
#[must_use]
pub fn segments_touch(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o1 = orient(a0, a1, b0);
    let o2 = orient(a0, a1, b1);
    let o3 = orient(b0, b1, a0);
    let o4 = orient(b0, b1, a1);

    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }

    (o1 == 0.0 && on_segment(a0, a1, b0))
        || (o2 == 0.0 && on_segment(a0, a1, b1))
        || (o3 == 0.0 && on_segment(b0, b1, a0))
        || (o4 == 0.0 && on_segment(b0, b1, a1))
}

/// Checks whether `p`, known to be collinear with `a-b`, lies within its bounding box.
fn on_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
