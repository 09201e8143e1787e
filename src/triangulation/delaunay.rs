//! Randomized incremental Delaunay triangulation.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! 1. Enclose all points in a large super-triangle
//! 2. Insert the points one at a time in random order
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Each insertion uses one of two engines, chosen by [`InsertionVariant`]:
//! splitting the containing triangle and flipping illegal edges, or
//! carving out every triangle whose circumcircle contains the new point and
//! fanning the hole (Bowyer-Watson).
//!
//! # Complexity
//!
//! - Time: O(n log n) expected for random insertion order
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use tessellum::triangulation::{delaunay_triangulation_with, DelaunayConfig, InsertionVariant};
//! use tessellum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let config = DelaunayConfig::default()
//!     .with_variant(InsertionVariant::Cavity)
//!     .with_seed(42);
//! let triangles = delaunay_triangulation_with(&points, &config).unwrap();
//!
//! // The interior point splits the outer triangle into three.
//! assert_eq!(triangles.len(), 3);
//! assert!(triangles.iter().all(|t| t.contains_vertex(points[3])));
//! ```

use super::cavity::insert_cavity;
use super::legalize::insert_with_flips;
use super::locate::Locator;
use super::mesh::Mesh;
use super::outer::OuterTriangle;
use super::triangle::Triangle;
use crate::error::TriangulationError;
use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation, DEFAULT_EPSILON};
use log::{debug, trace};
use num_traits::Float;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

/// Point insertion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertionVariant {
    /// Split the containing triangle, then legalize by edge flips.
    #[default]
    Flip,
    /// Remove the Bowyer-Watson cavity and re-fan it around the point.
    Cavity,
}

/// Parameters for [`delaunay_triangulation_with`] and
/// [`IncrementalDelaunay`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayConfig<F> {
    /// Insertion engine.
    pub variant: InsertionVariant,
    /// Absolute tolerance for orientation and degeneracy tests.
    pub eps: F,
    /// Shuffle seed. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
    /// Super-triangle size relative to the half-extent of the input.
    pub super_scale: F,
}

impl<F: Float> Default for DelaunayConfig<F> {
    fn default() -> Self {
        Self {
            variant: InsertionVariant::Flip,
            eps: F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            seed: None,
            super_scale: F::from(100.0).unwrap_or_else(F::max_value),
        }
    }
}

impl<F: Float> DelaunayConfig<F> {
    /// Sets the insertion engine.
    pub fn with_variant(mut self, variant: InsertionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the tolerance.
    pub fn with_eps(mut self, eps: F) -> Self {
        self.eps = eps;
        self
    }

    /// Fixes the insertion order for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the super-triangle scale.
    pub fn with_super_scale(mut self, scale: F) -> Self {
        self.super_scale = scale;
        self
    }

    /// Checks that the tolerance is non-negative and the scale exceeds 3.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        if self.eps.is_nan() || self.eps < F::zero() {
            return Err(TriangulationError::InvalidConfig(
                "eps must be non-negative",
            ));
        }
        let three = F::one() + F::one() + F::one();
        if !self.super_scale.is_finite() || self.super_scale <= three {
            return Err(TriangulationError::InvalidConfig(
                "super_scale must be finite and greater than 3",
            ));
        }
        Ok(())
    }
}

/// Rejects point sets that cannot be triangulated.
fn validate_points<F: Float>(points: &[Point2<F>], eps: F) -> Result<(), TriangulationError> {
    if points.len() < 3 {
        return Err(TriangulationError::TooFewPoints {
            count: points.len(),
        });
    }

    let mut seen = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(TriangulationError::NonFinite { index: i });
        }
        if let Some(&first) = seen.get(p) {
            return Err(TriangulationError::DuplicatePoint { first, second: i });
        }
        seen.insert(*p, i);
    }

    // Duplicates are excluded above, so points[1] differs from points[0].
    let (a, b) = (points[0], points[1]);
    if points[2..]
        .iter()
        .all(|&c| orient2d(a, b, c, eps) == Orientation::Collinear)
    {
        return Err(TriangulationError::AllCollinear);
    }
    Ok(())
}

/// A triangulation under construction.
///
/// Holds the mesh including the super-triangle. Points are added with
/// [`insert`](Self::insert) in any order; [`finish`](Self::finish) strips
/// the super-triangle and returns the result.
///
/// # Example
///
/// ```
/// use tessellum::triangulation::{DelaunayConfig, IncrementalDelaunay};
/// use tessellum::Point2;
///
/// let points = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let mut dt = IncrementalDelaunay::new(&points, &DelaunayConfig::default()).unwrap();
/// for p in points {
///     dt.insert(p).unwrap();
///     dt.mesh().check_consistency().unwrap();
/// }
/// assert_eq!(dt.finish().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IncrementalDelaunay<F> {
    mesh: Mesh<F>,
    outer: OuterTriangle<F>,
    locator: Locator<F>,
    variant: InsertionVariant,
    eps: F,
    flips: usize,
    inserted: usize,
}

impl<F: Float> IncrementalDelaunay<F> {
    /// Validates `points` and sets up a mesh holding only the
    /// super-triangle around them.
    ///
    /// The points are not inserted.
    pub fn new(points: &[Point2<F>], config: &DelaunayConfig<F>) -> Result<Self, TriangulationError> {
        config.validate()?;
        validate_points(points, config.eps)?;

        let outer = OuterTriangle::enclosing(points, config.super_scale);
        let mut mesh = Mesh::new();
        mesh.add(outer.triangle())?;

        Ok(Self {
            mesh,
            outer,
            locator: Locator::new(outer.triangle()),
            variant: config.variant,
            eps: config.eps,
            flips: 0,
            inserted: 0,
        })
    }

    /// Inserts one point.
    ///
    /// The point must lie strictly inside the super-triangle and must not
    /// coincide with an already inserted point.
    pub fn insert(&mut self, p: Point2<F>) -> Result<(), TriangulationError> {
        match self.variant {
            InsertionVariant::Flip => {
                let flips = insert_with_flips(
                    &mut self.mesh,
                    &mut self.locator,
                    &self.outer,
                    p,
                    self.eps,
                )?;
                trace!("point {} inserted with {} flips", self.inserted, flips);
                self.flips += flips;
            }
            InsertionVariant::Cavity => {
                let removed = insert_cavity(
                    &mut self.mesh,
                    &mut self.locator,
                    &self.outer,
                    p,
                    self.eps,
                )?;
                trace!("point {} inserted into a cavity of {}", self.inserted, removed);
            }
        }
        self.inserted += 1;
        Ok(())
    }

    /// The mesh, including triangles incident to the super-triangle.
    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    /// Super-triangle vertices in rank order.
    pub fn outer_vertices(&self) -> [Point2<F>; 3] {
        self.outer.vertices()
    }

    /// Total edge flips so far. Always zero for the cavity engine.
    pub fn flip_count(&self) -> usize {
        self.flips
    }

    /// Current number of triangles, super-triangle ones included.
    pub fn triangle_count(&self) -> usize {
        self.mesh.len()
    }

    /// Removes every triangle touching a super-triangle vertex and returns
    /// the rest, sorted by vertex coordinates.
    pub fn finish(mut self) -> Result<Vec<Triangle<F>>, TriangulationError> {
        let removed = self.mesh.remove_incident(&self.outer.vertices())?;
        trace!("stripped {} super-triangle triangles", removed);

        let mut triangles: Vec<Triangle<F>> = self.mesh.triangles().copied().collect();
        triangles.sort_unstable_by(|a, b| a.coordinate_cmp(b));
        Ok(triangles)
    }
}

/// Computes the Delaunay triangulation of a point set with default settings.
///
/// Uses edge flipping and a randomly seeded insertion order.
///
/// # Errors
///
/// Fails on fewer than three points, non-finite or duplicate points, or a
/// collinear point set.
///
/// # Example
///
/// ```
/// use tessellum::triangulation::delaunay_triangulation;
/// use tessellum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let triangles = delaunay_triangulation(&points).unwrap();
///
/// // Square with center point should produce 4 triangles
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn delaunay_triangulation<F: Float>(
    points: &[Point2<F>],
) -> Result<Vec<Triangle<F>>, TriangulationError> {
    delaunay_triangulation_with(points, &DelaunayConfig::default())
}

/// Computes the Delaunay triangulation of a point set.
///
/// With a fixed `config.seed`, both variants insert points in the same
/// order and the output is reproducible.
pub fn delaunay_triangulation_with<F: Float>(
    points: &[Point2<F>],
    config: &DelaunayConfig<F>,
) -> Result<Vec<Triangle<F>>, TriangulationError> {
    let mut dt = IncrementalDelaunay::new(points, config)?;
    debug!(
        "triangulating {} points with {:?} insertion",
        points.len(),
        config.variant
    );

    let mut order = points.to_vec();
    match config.seed {
        Some(seed) => order.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => order.shuffle(&mut rand::rng()),
    }

    for p in order {
        dt.insert(p)?;
    }

    let flips = dt.flip_count();
    let triangles = dt.finish()?;
    debug!(
        "triangulation done: {} triangles, {} flips",
        triangles.len(),
        flips
    );
    Ok(triangles)
}
