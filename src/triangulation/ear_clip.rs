use slotmap::SlotMap;

use crate::error::{Result, TriangulationError};
use crate::math::polygon_2d::point_in_triangle;
use crate::math::{orient, Point2};
use crate::polygon::Triangle;

slotmap::new_key_type! {
    /// Identifier of a vertex node in the clipping ring.
    struct VertexKey;
}

/// A vertex of the clipping ring with explicit neighbor links.
#[derive(Debug, Clone, Copy)]
struct VertexNode {
    point: Point2,
    prev: VertexKey,
    next: VertexKey,
}

/// Cyclic vertex ring stored in an arena; removal is O(1).
struct ClipRing {
    nodes: SlotMap<VertexKey, VertexNode>,
}

impl ClipRing {
    fn new(points: &[Point2]) -> (Self, VertexKey) {
        let n = points.len();
        let mut nodes = SlotMap::with_capacity_and_key(n);
        let keys: Vec<VertexKey> = points
            .iter()
            .map(|&point| {
                nodes.insert(VertexNode {
                    point,
                    prev: VertexKey::default(),
                    next: VertexKey::default(),
                })
            })
            .collect();
        for (i, &key) in keys.iter().enumerate() {
            let node = &mut nodes[key];
            node.prev = keys[(i + n - 1) % n];
            node.next = keys[(i + 1) % n];
        }
        (Self { nodes }, keys[0])
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn corners(&self, key: VertexKey) -> (Point2, Point2, Point2) {
        let node = &self.nodes[key];
        (self.nodes[node.prev].point, node.point, self.nodes[node.next].point)
    }

    /// Unlinks `key`, returning its successor.
    fn remove(&mut self, key: VertexKey) -> VertexKey {
        let node = self.nodes[key];
        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        self.nodes.remove(key);
        node.next
    }

    fn is_reflex_or_straight(&self, key: VertexKey) -> bool {
        let (a, b, c) = self.corners(key);
        orient(&a, &b, &c) <= 0.0
    }

    /// Checks whether `key` is a strictly convex vertex whose triangle holds no
    /// reflex vertex of the ring.
    ///
    /// Vertices coincident with a corner are bridge copies and are skipped.
    fn is_ear(&self, key: VertexKey) -> bool {
        let (a, b, c) = self.corners(key);
        if orient(&a, &b, &c) <= 0.0 {
            return false;
        }

        let node = &self.nodes[key];
        let stop = node.prev;
        let mut cursor = self.nodes[node.next].next;
        while cursor != stop {
            let candidate = &self.nodes[cursor];
            let p = candidate.point;
            if p != a
                && p != b
                && p != c
                && point_in_triangle(&a, &b, &c, &p)
                && self.is_reflex_or_straight(cursor)
            {
                return false;
            }
            cursor = candidate.next;
        }
        true
    }
}

/// Ear-clips a weakly simple counter-clockwise ring into `n - 2` triangles.
///
/// Ears are searched forward from the last clipped position, so the output
/// is deterministic. A full lap without an ear means the ring is not simple.
pub(super) fn ear_clip(points: &[Point2]) -> Result<Vec<Triangle>> {
    if points.len() < 3 {
        return Err(TriangulationError::TooFewVertices { count: points.len() }.into());
    }

    let (mut ring, mut cursor) = ClipRing::new(points);
    let mut triangles = Vec::with_capacity(points.len() - 2);
    let mut misses = 0;

    while ring.len() > 3 {
        if ring.is_ear(cursor) {
            let (a, b, c) = ring.corners(cursor);
            triangles.push(Triangle::new(a, b, c));
            cursor = ring.remove(cursor);
            misses = 0;
        } else {
            cursor = ring.nodes[cursor].next;
            misses += 1;
            if misses >= ring.len() {
                return Err(TriangulationError::NoEar { remaining: ring.len() }.into());
            }
        }
    }

    let (a, b, c) = ring.corners(cursor);
    if orient(&a, &b, &c) <= 0.0 {
        return Err(TriangulationError::DegenerateInput(format!(
            "last triangle ({}, {}), ({}, {}), ({}, {}) has no area",
            a.x, a.y, b.x, b.y, c.x, c.y
        ))
        .into());
    }
    triangles.push(Triangle::new(a, b, c));
    Ok(triangles)
}
