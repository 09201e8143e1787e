//! Canonical triangles and directed edges.
//!
//! Triangles are plain values keyed by their vertex coordinates. A triangle
//! is always stored counter-clockwise and rotated so that its lowest vertex
//! (smallest `y`, then smallest `x`) comes first, which makes two triangles
//! over the same three points compare and hash equal however they were
//! labeled.

use crate::error::TriangulationError;
use crate::primitives::{Circle2, Point2};
use crate::tolerance::circumcircle;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An oriented edge from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<F> {
    /// Start vertex
    pub from: Point2<F>,
    /// End vertex
    pub to: Point2<F>,
}

impl<F: Float> DirectedEdge<F> {
    /// Creates a new directed edge.
    #[inline]
    pub fn new(from: Point2<F>, to: Point2<F>) -> Self {
        Self { from, to }
    }

    /// Returns the same edge traversed the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// A triangle over three distinct points, kept in canonical form.
///
/// # Example
///
/// ```
/// use tessellum::triangulation::Triangle;
/// use tessellum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// // Every labeling of the same three points gives the same triangle.
/// assert_eq!(Triangle::new(a, b, c), Triangle::new(c, b, a));
/// assert_eq!(Triangle::new(b, c, a).vertices(), [a, b, c]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle, canonicalizing its vertex order.
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        let (a, b, c) = if below(b, a) && !below(c, b) {
            (b, c, a)
        } else if below(c, a) && below(c, b) {
            (c, a, b)
        } else {
            (a, b, c)
        };

        // Sign taken from the lowest vertex, so every labeling computes the
        // same product up to exact negation.
        if (b - a).cross(c - a) < F::zero() {
            Self { a, b: c, c: b }
        } else {
            Self { a, b, c }
        }
    }

    /// Returns the vertices in canonical order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three directed edges `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [DirectedEdge<F>; 3] {
        [
            DirectedEdge::new(self.a, self.b),
            DirectedEdge::new(self.b, self.c),
            DirectedEdge::new(self.c, self.a),
        ]
    }

    /// Checks if the triangle has a specific vertex.
    #[inline]
    pub fn contains_vertex(&self, v: Point2<F>) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Returns the vertex opposite to `edge`, if `edge` is one of this
    /// triangle's directed edges.
    pub fn opposite(&self, edge: DirectedEdge<F>) -> Option<Point2<F>> {
        self.edges()
            .iter()
            .zip([self.c, self.a, self.b])
            .find(|(e, _)| **e == edge)
            .map(|(_, v)| v)
    }

    /// Computes the circumscribed circle.
    ///
    /// Fails with [`TriangulationError::DegenerateTriangle`] for collinear
    /// vertices.
    pub fn circumcircle(&self, eps: F) -> Result<Circle2<F>, TriangulationError> {
        circumcircle(self.a, self.b, self.c, eps)
    }

    /// Tests whether `p` lies in the closed circumdisk.
    pub fn circumcircle_contains(&self, p: Point2<F>, eps: F) -> Result<bool, TriangulationError> {
        Ok(self.circumcircle(eps)?.contains(p))
    }

    /// Orders triangles by their canonical vertex coordinates.
    pub(crate) fn coordinate_cmp(&self, other: &Self) -> Ordering {
        self.vertices()
            .iter()
            .zip(other.vertices().iter())
            .map(|(p, q)| {
                p.y.partial_cmp(&q.y)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal))
            })
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl<F: Float> Eq for DirectedEdge<F> {}

impl<F: Float> Hash for DirectedEdge<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

// Canonical form makes field-wise hashing agree with equality.
impl<F: Float> Eq for Triangle<F> {}

impl<F: Float> Hash for Triangle<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices().hash(state);
    }
}

/// `p` precedes `q` in (y, x) order.
#[inline]
fn below<F: Float>(p: Point2<F>, q: Point2<F>) -> bool {
    p.y < q.y || (p.y == q.y && p.x < q.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pts() -> (Point2<f64>, Point2<f64>, Point2<f64>) {
        (
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 3.0),
            Point2::new(-1.0, 0.5),
        )
    }

    #[test]
    fn test_canonical_is_ccw_and_lowest_first() {
        let (a, b, c) = pts();
        let tri = Triangle::new(a, b, c);
        let [p, q, r] = tri.vertices();
        assert_eq!(p, c);
        assert!((q - p).cross(r - p) > 0.0);
    }

    #[test]
    fn test_all_labelings_equal() {
        let (a, b, c) = pts();
        let expected = Triangle::new(a, b, c);
        for (x, y, z) in [(a, b, c), (b, c, a), (c, a, b), (a, c, b), (c, b, a), (b, a, c)] {
            assert_eq!(Triangle::new(x, y, z), expected);
            assert_eq!(Triangle::new(x, y, z).vertices(), expected.vertices());
        }
    }

    #[test]
    fn test_canonicalization_idempotent() {
        let (a, b, c) = pts();
        let tri = Triangle::new(b, a, c);
        let [p, q, r] = tri.vertices();
        assert_eq!(Triangle::new(p, q, r).vertices(), tri.vertices());
    }

    #[test]
    fn test_tie_on_y_uses_x() {
        let a: Point2<f64> = Point2::new(1.0, 0.0);
        let b = Point2::new(0.0, 0.0);
        let c = Point2::new(0.5, 1.0);
        assert_eq!(Triangle::new(a, c, b).vertices(), [b, a, c]);
        assert_eq!(Triangle::new(c, b, a).vertices(), [b, a, c]);
    }

    #[test]
    fn test_hash_set_dedup() {
        let (a, b, c) = pts();
        let mut set = HashSet::new();
        set.insert(Triangle::new(a, b, c));
        set.insert(Triangle::new(c, a, b));
        set.insert(Triangle::new(b, a, c));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_edges_and_opposite() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let tri = Triangle::new(a, b, c);
        let edges = tri.edges();
        assert_eq!(edges[0], DirectedEdge::new(a, b));
        assert_eq!(edges[1], DirectedEdge::new(b, c));
        assert_eq!(edges[2], DirectedEdge::new(c, a));
        assert_eq!(tri.opposite(DirectedEdge::new(a, b)), Some(c));
        assert_eq!(tri.opposite(DirectedEdge::new(b, c)), Some(a));
        assert_eq!(tri.opposite(DirectedEdge::new(c, a)), Some(b));
        assert_eq!(tri.opposite(DirectedEdge::new(b, a)), None);
    }

    #[test]
    fn test_contains_vertex() {
        let (a, b, c) = pts();
        let tri = Triangle::new(a, b, c);
        assert!(tri.contains_vertex(a));
        assert!(tri.contains_vertex(b));
        assert!(tri.contains_vertex(c));
        assert!(!tri.contains_vertex(Point2::new(9.0, 9.0)));
    }

    #[test]
    fn test_reversed_edge() {
        let e = DirectedEdge::new(Point2::new(0.0_f64, 0.0), Point2::new(1.0, 2.0));
        assert_eq!(e.reversed().reversed(), e);
        assert_ne!(e.reversed(), e);
    }

    #[test]
    fn test_circumcircle_contains() {
        let tri = Triangle::new(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        assert!(tri.circumcircle_contains(Point2::new(0.5, 0.5), 1e-12).unwrap());
        assert!(tri.circumcircle_contains(Point2::new(1.0, 1.0), 1e-12).unwrap());
        assert!(!tri.circumcircle_contains(Point2::new(2.0, 2.0), 1e-12).unwrap());
    }
}
