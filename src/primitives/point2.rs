//! 2D point type.
//!
//! Unlike the other primitives, `Point2` is usable as a hash-map key: equality
//! and hashing are exact on coordinate values, which the triangulation mesh
//! relies on for vertex identity.

use super::Vec2;
use num_traits::Float;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
///
/// Two points are equal iff their coordinates compare equal; there is no
/// tolerance. `-0.0` and `0.0` are the same point. Points with `NaN`
/// coordinates must not be used as keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Eq for Point2<F> {}

impl<F: Float> Hash for Point2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
    }
}

/// Hashes a coordinate consistently with `==`: both zeros share one hash.
fn hash_coordinate<F: Float, H: Hasher>(value: F, state: &mut H) {
    let value = if value == F::zero() { F::zero() } else { value };
    value.integer_decode().hash(state);
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<Vec2<F>> for Point2<F> {
    fn from(v: Vec2<F>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}
