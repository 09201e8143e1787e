//! Point location by walking across the mesh.

use super::mesh::Mesh;
use super::triangle::{DirectedEdge, Triangle};
use crate::error::TriangulationError;
use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

/// Where a query point sits in the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location<F> {
    /// Triangle containing the point (interior or boundary).
    pub triangle: Triangle<F>,
    /// The edge of `triangle` the point lies on, within tolerance.
    pub on_edge: Option<DirectedEdge<F>>,
}

/// Walks from a cached triangle toward a query point.
///
/// At each step the point is tested against the current triangle's three
/// edges. If it is strictly right of one, the walk crosses that edge;
/// otherwise the current triangle contains it. The cached start is
/// replaced by whatever triangle the caller last created, so successive
/// nearby queries stay short.
#[derive(Debug, Clone, Copy)]
pub struct Locator<F> {
    hint: Option<Triangle<F>>,
}

impl<F: Float> Locator<F> {
    /// Creates a locator that starts walking from `start`.
    pub fn new(start: Triangle<F>) -> Self {
        Self { hint: Some(start) }
    }

    /// Replaces the cached start triangle.
    #[inline]
    pub fn set_hint(&mut self, triangle: Triangle<F>) {
        self.hint = Some(triangle);
    }

    /// Finds the triangle of `mesh` containing `p`.
    ///
    /// Falls back to an arbitrary triangle if the cached one is gone.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::PointOutsideMesh`] if the walk crosses the
    ///   mesh boundary or the mesh is empty.
    /// - [`TriangulationError::CoincidentVertex`] if `p` is collinear with
    ///   two edges of the final triangle, i.e. sits on a vertex.
    /// - [`TriangulationError::ConvergenceFailed`] if the walk exceeds
    ///   `4 * triangles + 16` steps.
    pub fn locate(
        &mut self,
        mesh: &Mesh<F>,
        p: Point2<F>,
        eps: F,
    ) -> Result<Location<F>, TriangulationError> {
        let mut current = match self.hint.filter(|t| mesh.contains(t)) {
            Some(t) => t,
            None => mesh
                .any_triangle()
                .ok_or(TriangulationError::PointOutsideMesh)?,
        };

        let limit = 4 * mesh.len() + 16;
        for _ in 0..limit {
            let mut exit = None;
            let mut on_edge = None;
            let mut collinear = 0;

            for edge in current.edges() {
                match orient2d(edge.from, edge.to, p, eps) {
                    Orientation::Clockwise => {
                        exit = Some(edge);
                        break;
                    }
                    Orientation::Collinear => {
                        collinear += 1;
                        on_edge = Some(edge);
                    }
                    Orientation::CounterClockwise => {}
                }
            }

            match exit {
                Some(edge) => {
                    current = mesh
                        .adjacent(edge)
                        .ok_or(TriangulationError::PointOutsideMesh)?;
                }
                None if collinear > 1 => return Err(TriangulationError::CoincidentVertex),
                None => {
                    self.hint = Some(current);
                    return Ok(Location {
                        triangle: current,
                        on_edge,
                    });
                }
            }
        }

        Err(TriangulationError::ConvergenceFailed { iterations: limit })
    }
}
