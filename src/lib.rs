//! tessellum - Incremental Delaunay triangulation
//!
//! Builds the Delaunay triangulation of a planar point set by randomized
//! incremental insertion. Two insertion engines are provided: edge flipping
//! with symbolic handling of the enclosing super-triangle, and Bowyer-Watson
//! cavity retriangulation. Both run on the same triangle mesh and
//! point-location walk, and agree on inputs whose triangulation is unique.
//!
//! # Example
//!
//! ```
//! use tessellum::triangulation::{delaunay_triangulation, is_delaunay};
//! use tessellum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(3.0, 0.2),
//!     Point2::new(2.6, 2.5),
//!     Point2::new(0.3, 2.0),
//!     Point2::new(1.4, 1.1),
//! ];
//!
//! let triangles = delaunay_triangulation(&points)?;
//! assert_eq!(triangles.len(), 4);
//! assert!(is_delaunay(&triangles, &points, 1e-12));
//! # Ok::<(), tessellum::TriangulationError>(())
//! ```

pub mod error;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use error::TriangulationError;
pub use primitives::{Circle2, Point2, Vec2};
pub use tolerance::{circumcircle, in_circumcircle, orient2d, Orientation};
pub use triangulation::{delaunay_triangulation, Triangle};
