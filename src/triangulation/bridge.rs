use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Result, TriangulationError};
use crate::math::polygon_2d::point_in_triangle;
use crate::math::{orient, Point2};

/// Splices every hole into `outer`, producing one weakly simple ring.
///
/// `outer` must be counter-clockwise and every hole clockwise. Holes are
/// processed by decreasing maximum x, each connected to a visible vertex of
/// the ring built so far through two coincident bridge edges, so the result
/// has `n + m + 2h` vertices.
pub(super) fn bridge_holes(outer: Vec<Point2>, mut holes: Vec<(usize, Vec<Point2>)>) -> Result<Vec<Point2>> {
    holes.sort_by(|(_, a), (_, b)| {
        max_x(b).partial_cmp(&max_x(a)).unwrap_or(Ordering::Equal)
    });

    let mut ring = outer;
    for (index, hole) in holes {
        let start = rightmost(&hole);
        let anchor = &hole[start];
        let k = find_bridge(&ring, anchor).ok_or(TriangulationError::UnbridgeableHole { hole: index })?;
        debug!(
            hole = index,
            hole_vertices = hole.len(),
            bridge_x = ring[k].x,
            bridge_y = ring[k].y,
            "bridging hole into outer ring"
        );

        let mut merged = Vec::with_capacity(ring.len() + hole.len() + 2);
        merged.extend_from_slice(&ring[..=k]);
        merged.extend_from_slice(&hole[start..]);
        merged.extend_from_slice(&hole[..=start]);
        merged.push(ring[k]);
        merged.extend_from_slice(&ring[k + 1..]);
        ring = merged;
    }
    Ok(ring)
}

fn max_x(points: &[Point2]) -> f64 {
    points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
}

/// Index of the vertex with the largest x, lowest y on ties.
fn rightmost(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if p.x > b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    best
}

/// Finds the index of a ring vertex visible from `m`, a point strictly inside the ring.
///
/// Casts a ray from `m` toward +x, takes the nearest upward edge it hits,
/// and refines the edge's right endpoint by the reflex vertices inside the
/// visibility triangle, preferring the one closest in angle to the ray.
fn find_bridge(ring: &[Point2], m: &Point2) -> Option<usize> {
    let n = ring.len();
    let mut hit_x = f64::INFINITY;
    let mut hit_edge = None;

    for i in 0..n {
        let p = &ring[i];
        let q = &ring[(i + 1) % n];
        // Interior lies to the left of upward edges of a CCW ring.
        if p.y <= m.y && m.y <= q.y && p.y < q.y {
            let x = p.x + (m.y - p.y) * (q.x - p.x) / (q.y - p.y);
            if x >= m.x && x < hit_x {
                hit_x = x;
                hit_edge = Some(i);
            }
        }
    }

    let i = hit_edge?;
    let j = (i + 1) % n;
    let hit = Point2::new(hit_x, m.y);
    if hit == ring[i] {
        return Some(visible_copy(ring, i, m));
    }
    if hit == ring[j] {
        return Some(visible_copy(ring, j, m));
    }

    let mut candidate = if ring[j].x > ring[i].x { j } else { i };
    let apex = ring[candidate];
    let (t0, t1, t2) = if orient(m, &hit, &apex) >= 0.0 {
        (*m, hit, apex)
    } else {
        (*m, apex, hit)
    };

    let mut best_tan = f64::INFINITY;
    for (r, point) in ring.iter().enumerate() {
        if point.x < m.x || point.x > apex.x.max(hit_x) || point.x == m.x {
            continue;
        }
        if !point_in_triangle(&t0, &t1, &t2, point) {
            continue;
        }
        let tan = (m.y - point.y).abs() / (point.x - m.x);
        let closer = tan < best_tan || (tan == best_tan && point.x < ring[candidate].x);
        if closer && locally_inside(ring, r, m) {
            candidate = r;
            best_tan = tan;
        }
    }
    Some(visible_copy(ring, candidate, m))
}

/// Among the vertices coincident with `ring[k]`, picks the one whose interior
/// sector faces `target`.
///
/// Earlier bridges duplicate their endpoints; splicing into the wrong copy
/// makes the ring cross itself.
fn visible_copy(ring: &[Point2], k: usize, target: &Point2) -> usize {
    ring.iter()
        .enumerate()
        .find(|&(r, p)| *p == ring[k] && locally_inside(ring, r, target))
        .map_or(k, |(r, _)| r)
}

/// Returns `true` if the direction from vertex `r` toward `target` points into
/// the polygon interior at `r`.
fn locally_inside(ring: &[Point2], r: usize, target: &Point2) -> bool {
    let n = ring.len();
    let prev = &ring[(r + n - 1) % n];
    let cur = &ring[r];
    let next = &ring[(r + 1) % n];

    if orient(prev, cur, next) > 0.0 {
        // Convex corner: target must lie left of both boundary edges.
        orient(cur, next, target) > 0.0 && orient(prev, cur, target) > 0.0
    } else {
        // Reflex or straight corner: anything outside the exterior wedge.
        !(orient(cur, next, target) <= 0.0 && orient(prev, cur, target) <= 0.0)
    }
}
