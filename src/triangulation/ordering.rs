//! Angular ordering of points around a center.

use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;
use std::cmp::Ordering;

/// Compares two points by counter-clockwise angle around `center`.
///
/// Angles start at the positive x axis. Points are first split into the
/// upper and lower half-planes; within a half-plane `p` comes before `q`
/// iff `orient2d(center, p, q)` is counter-clockwise. This makes the order
/// total over the full circle, which a bare orientation comparison is not.
/// Points on the same ray are ordered by distance.
pub fn angular_cmp<F: Float>(center: Point2<F>, p: Point2<F>, q: Point2<F>) -> Ordering {
    let u = p - center;
    let v = q - center;

    match (u.is_upper(), v.is_upper()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match orient2d(center, p, q, F::zero()) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => u
                .magnitude_squared()
                .partial_cmp(&v.magnitude_squared())
                .unwrap_or(Ordering::Equal),
        },
    }
}

/// Sorts `points` in place by counter-clockwise angle around `center`.
///
/// Used to turn the vertices of a star-shaped cavity into its boundary
/// polygon.
///
/// # Example
///
/// ```
/// use tessellum::triangulation::sort_around;
/// use tessellum::Point2;
///
/// let center = Point2::new(0.0_f64, 0.0);
/// let mut ring = vec![
///     Point2::new(0.0, -1.0),
///     Point2::new(-1.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
/// sort_around(center, &mut ring);
///
/// assert_eq!(ring, vec![
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(-1.0, 0.0),
///     Point2::new(0.0, -1.0),
/// ]);
/// ```
pub fn sort_around<F: Float>(center: Point2<F>, points: &mut [Point2<F>]) {
    points.sort_unstable_by(|&p, &q| angular_cmp(center, p, q));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn ring(center: Point2<f64>, n: usize) -> Vec<Point2<f64>> {
        (0..n)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                Point2::new(center.x + angle.cos(), center.y + angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_angular_cmp_half_planes() {
        let c: Point2<f64> = Point2::origin();
        let east = Point2::new(1.0, 0.0);
        let north = Point2::new(0.0, 1.0);
        let west = Point2::new(-1.0, 0.0);
        let south = Point2::new(0.0, -1.0);
        assert_eq!(angular_cmp(c, east, north), Ordering::Less);
        assert_eq!(angular_cmp(c, north, west), Ordering::Less);
        assert_eq!(angular_cmp(c, west, south), Ordering::Less);
        assert_eq!(angular_cmp(c, south, east), Ordering::Greater);
        assert_eq!(angular_cmp(c, east, east), Ordering::Equal);
    }

    #[test]
    fn test_same_ray_by_distance() {
        let c: Point2<f64> = Point2::origin();
        assert_eq!(
            angular_cmp(c, Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_shuffled_ring() {
        let center = Point2::new(3.0, -2.0);
        let expected = ring(center, 12);
        let mut points = expected.clone();
        points.shuffle(&mut StdRng::seed_from_u64(7));

        sort_around(center, &mut points);
        assert_eq!(points, expected);
    }

    #[test]
    fn test_sort_irregular_star() {
        let center = Point2::new(0.2, 0.1);
        let mut points = vec![
            Point2::new(-3.0, 0.5),
            Point2::new(0.0, -4.0),
            Point2::new(5.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(-1.0, -1.0),
        ];
        sort_around(center, &mut points);

        for w in points.windows(2) {
            assert_ne!(angular_cmp(center, w[0], w[1]), Ordering::Greater);
        }
        // Consecutive pairs, including the wraparound, turn counter-clockwise.
        for i in 0..points.len() {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            assert_eq!(
                orient2d(center, p, q, 1e-12),
                Orientation::CounterClockwise
            );
        }
    }
}
