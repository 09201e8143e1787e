//! Geometric predicates with explicit tolerance.

use crate::error::TriangulationError;
use crate::primitives::{Circle2, Point2};
use num_traits::Float;

/// Absolute tolerance used by the triangulation when none is configured.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

impl Orientation {
    /// Returns `+1`, `-1` or `0` for counter-clockwise, clockwise and collinear.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }
}

/// Twice the signed area of triangle `abc`, expanded term by term.
#[inline]
fn signed_area2<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    a.x * b.y + b.x * c.y + c.x * a.y - a.y * b.x - b.y * c.x - c.y * a.x
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// The determinant is evaluated from its full expansion rather than from
/// `(b - a) x (c - a)`, and clamped to collinear when its absolute value is
/// at most `eps`.
///
/// # Example
///
/// ```
/// use tessellum::tolerance::{orient2d, Orientation};
/// use tessellum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// assert_eq!(orient2d(a, b, Point2::new(0.5, 1.0), 1e-12), Orientation::CounterClockwise);
/// assert_eq!(orient2d(a, b, Point2::new(2.0, 0.0), 1e-12).sign(), 0);
/// ```
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let det = signed_area2(a, b, c);

    if det > eps {
        Orientation::CounterClockwise
    } else if det < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Computes the circumscribed circle of triangle `abc`.
///
/// Uses the closed-form circumcenter determinants. Fails with
/// [`TriangulationError::DegenerateTriangle`] when the three points are
/// collinear within `eps` (the same test [`orient2d`] applies), so callers
/// never receive a NaN or infinite circle.
///
/// # Example
///
/// ```
/// use tessellum::tolerance::circumcircle;
/// use tessellum::Point2;
///
/// let circle = circumcircle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
///     1e-12,
/// )
/// .unwrap();
/// assert_eq!(circle.center, Point2::new(1.0, 1.0));
///
/// let flat = circumcircle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
///     1e-12,
/// );
/// assert!(flat.is_err());
/// ```
pub fn circumcircle<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> Result<Circle2<F>, TriangulationError> {
    let det = signed_area2(a, b, c);
    if det.abs() <= eps {
        return Err(TriangulationError::DegenerateTriangle);
    }

    let d = det + det;
    let aa = a.x * a.x + a.y * a.y;
    let bb = b.x * b.x + b.y * b.y;
    let cc = c.x * c.x + c.y * c.y;

    let ux = (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / d;
    let uy = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;

    let center = Point2::new(ux, uy);
    Ok(Circle2::new(center, center.distance(a)))
}

/// Tests whether `p` lies in the closed circumdisk of triangle `abc`.
///
/// Points exactly on the circle count as inside. Vertex order does not
/// matter. Fails like [`circumcircle`] on a degenerate triangle.
pub fn in_circumcircle<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    p: Point2<F>,
    eps: F,
) -> Result<bool, TriangulationError> {
    Ok(circumcircle(a, b, c, eps)?.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // orient2d tests

    #[test]
    fn test_orient2d_ccw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1.0);
        assert_eq!(orient2d(a, b, c, 1e-12), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, c, 1e-12).sign(), 1);
    }

    #[test]
    fn test_orient2d_cw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, -1.0);
        assert_eq!(orient2d(a, b, c, 1e-12), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, c, 1e-12).sign(), -1);
    }

    #[test]
    fn test_orient2d_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(2.0, 0.0);
        assert_eq!(orient2d(a, b, c, 1e-12), Orientation::Collinear);
    }

    #[test]
    fn test_orient2d_clamps_near_ties() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1e-13);
        assert_eq!(orient2d(a, b, c, 1e-12), Orientation::Collinear);
        assert_eq!(orient2d(a, b, c, 0.0), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orient2d_just_above_tolerance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1e-9);
        assert_eq!(orient2d(a, b, c, 1e-12), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orient2d_rotation_invariant() {
        let a: Point2<f64> = Point2::new(0.3, 0.1);
        let b = Point2::new(2.0, 0.7);
        let c = Point2::new(-1.0, 3.0);
        let o = orient2d(a, b, c, 1e-12);
        assert_eq!(orient2d(b, c, a, 1e-12), o);
        assert_eq!(orient2d(c, a, b, 1e-12), o);
        assert_eq!(orient2d(b, a, c, 1e-12).sign(), -o.sign());
    }

    // circumcircle tests

    #[test]
    fn test_circumcircle_right_triangle() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let circle = circumcircle(a, b, c, 1e-12).unwrap();
        assert_relative_eq!(circle.center.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(circle.radius, 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_circumcircle_order_independent() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(1.0, 3.0);
        let ccw = circumcircle(a, b, c, 1e-12).unwrap();
        let cw = circumcircle(a, c, b, 1e-12).unwrap();
        assert_relative_eq!(ccw.center.x, cw.center.x, epsilon = 1e-12);
        assert_relative_eq!(ccw.center.y, cw.center.y, epsilon = 1e-12);
        assert_relative_eq!(ccw.radius, cw.radius, epsilon = 1e-12);
    }

    #[test]
    fn test_circumcircle_passes_through_vertices() {
        let a: Point2<f64> = Point2::new(-2.0, 1.0);
        let b = Point2::new(3.0, -1.5);
        let c = Point2::new(0.5, 4.0);
        let circle = circumcircle(a, b, c, 1e-12).unwrap();
        for v in [a, b, c] {
            assert_relative_eq!(circle.center.distance(v), circle.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_circumcircle_degenerate() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(3.0, 3.0);
        assert_eq!(
            circumcircle(a, b, c, 1e-12),
            Err(TriangulationError::DegenerateTriangle)
        );
        assert_eq!(
            in_circumcircle(a, b, c, Point2::new(0.0, 1.0), 1e-12),
            Err(TriangulationError::DegenerateTriangle)
        );
    }

    // in_circumcircle tests

    #[test]
    fn test_in_circumcircle_inside_and_outside() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);
        assert!(in_circumcircle(a, b, c, Point2::new(0.5, 0.288), 1e-12).unwrap());
        assert!(!in_circumcircle(a, b, c, Point2::new(10.0, 10.0), 1e-12).unwrap());
    }

    #[test]
    fn test_in_circumcircle_boundary_counts_as_inside() {
        // The fourth corner of the unit square is on the circumcircle.
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(in_circumcircle(a, b, c, Point2::new(1.0, 1.0), 1e-12).unwrap());
        assert!(in_circumcircle(a, b, c, a, 1e-12).unwrap());
    }
}
