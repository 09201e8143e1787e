//! Error types for triangulation.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
///
/// Input problems are reported before construction starts. The remaining
/// variants mean the mesh reached a state the insertion logic should never
/// produce; they are returned instead of silently continuing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// Fewer than three input points.
    #[error("need at least 3 points, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// An input coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },

    /// Two input points have identical coordinates.
    #[error("points {first} and {second} are duplicates")]
    DuplicatePoint {
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated point.
        second: usize,
    },

    /// Every input point lies on a single line.
    #[error("all points are collinear")]
    AllCollinear,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Circumcircle requested for a collinear triangle.
    #[error("degenerate triangle: vertices are collinear")]
    DegenerateTriangle,

    /// A triangle was added whose directed edge is already owned.
    #[error("topology violation: directed edge already present")]
    EdgeExists,

    /// A triangle was removed that is not part of the mesh.
    #[error("topology violation: triangle not present")]
    TriangleNotFound,

    /// The triangle set and the edge index disagree.
    #[error("mesh index inconsistent: {0}")]
    InconsistentIndex(&'static str),

    /// An edge expected to have a neighbor lies on the mesh boundary.
    #[error("topology violation: edge has no neighboring triangle")]
    MissingNeighbor,

    /// The point-location walk left the mesh.
    #[error("point lies outside the triangulated region")]
    PointOutsideMesh,

    /// A located point sits on an existing vertex within tolerance.
    #[error("point coincides with an existing vertex")]
    CoincidentVertex,

    /// The point-location walk did not settle.
    #[error("point location failed after {iterations} steps")]
    ConvergenceFailed {
        /// Number of steps attempted.
        iterations: usize,
    },
}
