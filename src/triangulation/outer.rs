//! The enclosing super-triangle and its symbolic vertex ranks.

use super::triangle::Triangle;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// How "infinite" a vertex is for the outer legality rule.
///
/// The three super-triangle vertices stand in for points at infinity.
/// Rather than carrying infinite coordinates they get fixed ranks:
/// rightmost `-1`, topmost `-2`, the remaining one `-3`. Every input point
/// is `Ordinary`. The derived order puts all outer ranks before
/// `Ordinary`, and `Outer(-3) < Outer(-2) < Outer(-1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexRank {
    /// A super-triangle vertex with rank `-1`, `-2` or `-3`.
    Outer(i8),
    /// An input point (rank `0`).
    Ordinary,
}

impl VertexRank {
    /// Returns true for super-triangle vertices.
    #[inline]
    pub fn is_outer(self) -> bool {
        matches!(self, VertexRank::Outer(_))
    }

    /// The numeric rank: `-1`, `-2`, `-3` or `0`.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            VertexRank::Outer(r) => r,
            VertexRank::Ordinary => 0,
        }
    }

    /// The direction in which an outer vertex recedes to infinity: right
    /// for `-1`, up for `-2`, down-left for `-3`. `None` for input points.
    pub fn direction<F: Float>(self) -> Option<Vec2<F>> {
        match self {
            VertexRank::Outer(-1) => Some(Vec2::new(F::one(), F::zero())),
            VertexRank::Outer(-2) => Some(Vec2::new(F::zero(), F::one())),
            VertexRank::Outer(_) => Some(Vec2::new(-F::one(), -F::one())),
            VertexRank::Ordinary => None,
        }
    }
}

/// A triangle strictly containing every input point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterTriangle<F> {
    right: Point2<F>,
    top: Point2<F>,
    left: Point2<F>,
}

impl<F: Float> OuterTriangle<F> {
    /// Builds a super-triangle around `points`.
    ///
    /// With `m` the half-extent of the bounding square and `s = scale * m`,
    /// the vertices sit at `center + (s, 0)`, `center + (0, s)` and
    /// `center - (s, s)`. Any `scale > 3` strictly contains the square.
    ///
    /// # Example
    ///
    /// ```
    /// use tessellum::triangulation::{OuterTriangle, VertexRank};
    /// use tessellum::Point2;
    ///
    /// let points = [Point2::new(0.0_f64, 0.0), Point2::new(2.0, 2.0)];
    /// let outer = OuterTriangle::enclosing(&points, 10.0);
    /// let [right, top, left] = outer.vertices();
    ///
    /// assert_eq!(right, Point2::new(11.0, 1.0));
    /// assert_eq!(top, Point2::new(1.0, 11.0));
    /// assert_eq!(left, Point2::new(-9.0, -9.0));
    /// assert_eq!(outer.rank(top), VertexRank::Outer(-2));
    /// assert_eq!(outer.rank(points[0]), VertexRank::Ordinary);
    /// ```
    pub fn enclosing(points: &[Point2<F>], scale: F) -> Self {
        let (mut min_x, mut min_y) = (F::infinity(), F::infinity());
        let (mut max_x, mut max_y) = (F::neg_infinity(), F::neg_infinity());
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let center = Point2::new(min_x, min_y).midpoint(Point2::new(max_x, max_y));
        let two = F::one() + F::one();
        let mut half = ((max_x - min_x) / two).max((max_y - min_y) / two);
        if half <= F::zero() {
            half = F::one();
        }
        let s = scale * half;

        Self {
            right: Point2::new(center.x + s, center.y),
            top: Point2::new(center.x, center.y + s),
            left: Point2::new(center.x - s, center.y - s),
        }
    }

    /// The vertices in rank order `-1`, `-2`, `-3`.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.right, self.top, self.left]
    }

    /// The super-triangle itself.
    #[inline]
    pub fn triangle(&self) -> Triangle<F> {
        Triangle::new(self.right, self.top, self.left)
    }

    /// Returns true if `p` is one of the super-triangle vertices.
    #[inline]
    pub fn is_outer(&self, p: Point2<F>) -> bool {
        self.rank(p).is_outer()
    }

    /// Rank of a vertex for the outer legality rule.
    pub fn rank(&self, p: Point2<F>) -> VertexRank {
        if p == self.right {
            VertexRank::Outer(-1)
        } else if p == self.top {
            VertexRank::Outer(-2)
        } else if p == self.left {
            VertexRank::Outer(-3)
        } else {
            VertexRank::Ordinary
        }
    }
}
