//! Checks for finished triangulations.

use super::triangle::Triangle;
use crate::primitives::{Circle2, Point2};
use num_traits::Float;
use std::collections::HashSet;

/// Finds a triangle whose circumcircle strictly contains one of `points`.
///
/// A point counts as inside only when it is closer to the center than
/// `radius - eps`, so co-circular inputs are not reported. A collinear
/// triangle is always a violation and is reported with its first vertex.
pub fn first_violation<F: Float>(
    triangles: &[Triangle<F>],
    points: &[Point2<F>],
    eps: F,
) -> Option<(Triangle<F>, Point2<F>)> {
    for triangle in triangles {
        let Ok(circle) = triangle.circumcircle(eps) else {
            return Some((*triangle, triangle.vertices()[0]));
        };
        let shrunk = Circle2::new(circle.center, circle.radius - eps);
        if let Some(&p) = points
            .iter()
            .find(|&&p| !triangle.contains_vertex(p) && shrunk.contains_strict(p))
        {
            return Some((*triangle, p));
        }
    }
    None
}

/// Returns true if no point of `points` lies strictly inside the
/// circumcircle of any triangle.
///
/// # Example
///
/// ```
/// use tessellum::triangulation::{is_delaunay, Triangle};
/// use tessellum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(4.0, 0.0);
/// let c = Point2::new(4.0, 1.0);
/// let d = Point2::new(0.0, 1.0);
///
/// let good = [Triangle::new(a, b, c), Triangle::new(a, c, d)];
/// assert!(is_delaunay(&good, &[a, b, c, d], 1e-12));
///
/// let e = Point2::new(2.0, 0.1);
/// let bad = [Triangle::new(a, b, d)];
/// assert!(!is_delaunay(&bad, &[a, b, d, e], 1e-12));
/// ```
pub fn is_delaunay<F: Float>(triangles: &[Triangle<F>], points: &[Point2<F>], eps: F) -> bool {
    first_violation(triangles, points, eps).is_none()
}

/// Returns true if every point is a vertex of some triangle and every
/// triangle vertex is one of the points.
pub fn covers_all_points<F: Float>(triangles: &[Triangle<F>], points: &[Point2<F>]) -> bool {
    let used: HashSet<Point2<F>> = triangles.iter().flat_map(|t| t.vertices()).collect();
    let input: HashSet<Point2<F>> = points.iter().copied().collect();
    used == input
}
