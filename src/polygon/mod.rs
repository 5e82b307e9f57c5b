mod ring;
mod triangle;

pub use ring::Ring;
pub use triangle::Triangle;

use crate::math::Point2;

/// A planar polygon: one outer ring and zero or more holes.
///
/// By convention the outer ring winds counter-clockwise and holes wind
/// clockwise; [`Polygon2d::corrected`] enforces this. An empty inner ring is
/// allowed and means "no hole".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2d {
    outer: Ring,
    inners: Vec<Ring>,
}

impl Polygon2d {
    /// Creates a polygon from an outer ring and its holes.
    #[must_use]
    pub fn new(outer: Ring, inners: Vec<Ring>) -> Self {
        Self { outer, inners }
    }

    /// Creates a hole-free polygon from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let outer = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        Self::new(outer, Vec::new())
    }

    /// Adds a hole given as `(x, y)` pairs.
    #[must_use]
    pub fn with_hole(mut self, coords: &[(f64, f64)]) -> Self {
        self.inners
            .push(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect());
        self
    }

    #[must_use]
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    /// All inner rings, including empty ones.
    #[must_use]
    pub fn inners(&self) -> &[Ring] {
        &self.inners
    }

    /// Inner rings that actually describe a hole.
    pub fn holes(&self) -> impl Iterator<Item = &Ring> {
        self.inners.iter().filter(|r| !r.is_empty())
    }

    /// Enclosed area: outer area minus the area of every hole.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer.area() - self.holes().map(Ring::area).sum::<f64>()
    }

    /// Returns a copy with normalized rings.
    ///
    /// Duplicate and closing vertices are removed, the outer ring is made
    /// counter-clockwise and holes clockwise. Empty inner rings are kept.
    #[must_use]
    pub fn corrected(&self) -> Self {
        let mut outer = self.outer.cleaned();
        if outer.signed_area() < 0.0 {
            outer = outer.reversed();
        }
        let inners = self
            .inners
            .iter()
            .map(|inner| {
                let inner = inner.cleaned();
                if inner.signed_area() > 0.0 {
                    inner.reversed()
                } else {
                    inner
                }
            })
            .collect();
        Self { outer, inners }
    }

    /// Returns `true` for a hole-free polygon with a convex outer ring.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.holes().next().is_none() && self.outer.is_convex()
    }

    /// Returns `true` if the outer ring and every hole are simple.
    ///
    /// Containment of holes inside the outer ring is not checked.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.outer.is_simple() && self.holes().all(Ring::is_simple)
    }
}

impl From<Ring> for Polygon2d {
    fn from(outer: Ring) -> Self {
        Self::new(outer, Vec::new())
    }
}
