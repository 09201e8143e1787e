//! Triangle mesh with a directed-edge adjacency index.
//!
//! Triangles are values, not linked nodes. Alongside the triangle set the
//! mesh keeps a map from every directed edge to the vertex opposite it in
//! the triangle that owns it. The triangle across an edge is found by
//! looking up the reversed edge, so no triangle holds a reference to
//! another.

use super::triangle::{DirectedEdge, Triangle};
use crate::error::TriangulationError;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::{HashMap, HashSet};

/// A set of triangles plus the directed-edge → opposite-vertex index.
///
/// Every triangle in the set has exactly its three directed edges in the
/// index, and every index entry belongs to a triangle in the set. Each
/// directed edge is owned by at most one triangle.
///
/// # Example
///
/// ```
/// use tessellum::triangulation::{DirectedEdge, Mesh, Triangle};
/// use tessellum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(1.0, 1.0);
/// let d = Point2::new(0.0, 1.0);
///
/// let mut mesh = Mesh::new();
/// mesh.add(Triangle::new(a, b, c)).unwrap();
/// mesh.add(Triangle::new(a, c, d)).unwrap();
///
/// // The diagonal a-c is shared.
/// assert_eq!(mesh.adjacent(DirectedEdge::new(a, c)), Some(Triangle::new(a, b, c)));
/// assert_eq!(mesh.opposite_vertex(DirectedEdge::new(a, c)), Some(d));
/// assert_eq!(mesh.adjacent(DirectedEdge::new(a, b)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh<F> {
    triangles: HashSet<Triangle<F>>,
    edges: HashMap<DirectedEdge<F>, Point2<F>>,
}

impl<F: Float> Mesh<F> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: HashSet::new(),
            edges: HashMap::new(),
        }
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of directed edges in the index.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all triangles in unspecified order.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle<F>> + '_ {
        self.triangles.iter()
    }

    /// Returns true if the triangle is part of the mesh.
    #[inline]
    pub fn contains(&self, triangle: &Triangle<F>) -> bool {
        self.triangles.contains(triangle)
    }

    /// Returns some triangle of the mesh, if any.
    pub fn any_triangle(&self) -> Option<Triangle<F>> {
        self.triangles.iter().next().copied()
    }

    /// Adds a triangle and registers its three directed edges.
    ///
    /// Fails with [`TriangulationError::EdgeExists`] if any of the edges is
    /// already owned by another triangle. The mesh is left unchanged in that
    /// case.
    pub fn add(&mut self, triangle: Triangle<F>) -> Result<(), TriangulationError> {
        let edges = triangle.edges();
        if edges.iter().any(|e| self.edges.contains_key(e)) {
            return Err(TriangulationError::EdgeExists);
        }

        let [a, b, c] = triangle.vertices();
        for (edge, opposite) in edges.into_iter().zip([c, a, b]) {
            self.edges.insert(edge, opposite);
        }
        self.triangles.insert(triangle);
        Ok(())
    }

    /// Removes a triangle and its three directed edges.
    ///
    /// Fails with [`TriangulationError::TriangleNotFound`] if the triangle is
    /// not part of the mesh.
    pub fn remove(&mut self, triangle: &Triangle<F>) -> Result<(), TriangulationError> {
        if !self.triangles.remove(triangle) {
            return Err(TriangulationError::TriangleNotFound);
        }
        for edge in triangle.edges() {
            self.edges.remove(&edge);
        }
        Ok(())
    }

    /// Returns the vertex opposite `edge` in the triangle that owns it.
    #[inline]
    pub fn opposite_vertex(&self, edge: DirectedEdge<F>) -> Option<Point2<F>> {
        self.edges.get(&edge).copied()
    }

    /// Returns the triangle that owns `edge`.
    pub fn owner(&self, edge: DirectedEdge<F>) -> Option<Triangle<F>> {
        self.opposite_vertex(edge)
            .map(|v| Triangle::new(edge.from, edge.to, v))
    }

    /// Returns the triangle on the other side of `edge`.
    ///
    /// This is the owner of the reversed edge, or `None` when `edge` lies on
    /// the boundary of the mesh.
    #[inline]
    pub fn adjacent(&self, edge: DirectedEdge<F>) -> Option<Triangle<F>> {
        self.owner(edge.reversed())
    }

    /// Returns the neighbors across each edge of `triangle`, in edge order,
    /// skipping boundary edges.
    pub fn all_adjacent(&self, triangle: &Triangle<F>) -> Vec<Triangle<F>> {
        triangle
            .edges()
            .into_iter()
            .filter_map(|e| self.adjacent(e))
            .collect()
    }

    /// Removes every triangle that has any of `vertices` as a corner.
    ///
    /// Returns the number of triangles removed.
    pub fn remove_incident(&mut self, vertices: &[Point2<F>]) -> Result<usize, TriangulationError> {
        let doomed: Vec<Triangle<F>> = self
            .triangles
            .iter()
            .filter(|t| vertices.iter().any(|&v| t.contains_vertex(v)))
            .copied()
            .collect();

        for triangle in &doomed {
            self.remove(triangle)?;
        }
        Ok(doomed.len())
    }

    /// Verifies that the triangle set and edge index agree.
    ///
    /// Checks that there are exactly three index entries per triangle, that
    /// each entry belongs to a triangle in the set, and that each reversed
    /// entry is owned by a triangle containing that reversed edge.
    pub fn check_consistency(&self) -> Result<(), TriangulationError> {
        if self.edges.len() != 3 * self.triangles.len() {
            return Err(TriangulationError::InconsistentIndex(
                "edge count is not three per triangle",
            ));
        }

        for triangle in &self.triangles {
            for edge in triangle.edges() {
                if self.edges.get(&edge).copied() != triangle.opposite(edge) {
                    return Err(TriangulationError::InconsistentIndex(
                        "triangle edge missing from index",
                    ));
                }
            }
        }

        for (&edge, &opposite) in &self.edges {
            if !self.triangles.contains(&Triangle::new(edge.from, edge.to, opposite)) {
                return Err(TriangulationError::InconsistentIndex(
                    "index entry without a triangle",
                ));
            }
            if let Some(neighbor) = self.adjacent(edge) {
                if neighbor.opposite(edge.reversed()).is_none() {
                    return Err(TriangulationError::InconsistentIndex(
                        "neighbor does not own the reversed edge",
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Point2<f64>; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    fn two_triangle_mesh() -> Mesh<f64> {
        let [a, b, c, d] = square();
        let mut mesh = Mesh::new();
        mesh.add(Triangle::new(a, b, c)).unwrap();
        mesh.add(Triangle::new(a, c, d)).unwrap();
        mesh
    }

    #[test]
    fn test_add_registers_three_edges() {
        let [a, b, c, _] = square();
        let mut mesh = Mesh::new();
        mesh.add(Triangle::new(c, b, a)).unwrap();
        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.edge_count(), 3);
        assert_eq!(mesh.opposite_vertex(DirectedEdge::new(a, b)), Some(c));
        assert_eq!(mesh.opposite_vertex(DirectedEdge::new(b, c)), Some(a));
        assert_eq!(mesh.opposite_vertex(DirectedEdge::new(c, a)), Some(b));
        assert_eq!(mesh.opposite_vertex(DirectedEdge::new(b, a)), None);
        mesh.check_consistency().unwrap();
    }

    #[test]
    fn test_add_duplicate_edge_fails() {
        let [a, b, c, d] = square();
        let mut mesh = two_triangle_mesh();
        // Overlaps a-b-c on the directed edge a->b.
        assert_eq!(
            mesh.add(Triangle::new(a, b, d)),
            Err(TriangulationError::EdgeExists)
        );
        assert_eq!(
            mesh.add(Triangle::new(b, c, a)),
            Err(TriangulationError::EdgeExists)
        );
        assert_eq!(mesh.len(), 2);
        mesh.check_consistency().unwrap();
    }

    #[test]
    fn test_remove() {
        let [a, b, c, d] = square();
        let mut mesh = two_triangle_mesh();
        mesh.remove(&Triangle::new(b, c, a)).unwrap();
        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.edge_count(), 3);
        assert!(mesh.contains(&Triangle::new(a, c, d)));
        assert_eq!(mesh.adjacent(DirectedEdge::new(a, c)), None);
        mesh.check_consistency().unwrap();
    }

    #[test]
    fn test_remove_missing_fails() {
        let [a, b, _, d] = square();
        let mut mesh = two_triangle_mesh();
        assert_eq!(
            mesh.remove(&Triangle::new(a, b, d)),
            Err(TriangulationError::TriangleNotFound)
        );
        assert_eq!(mesh.len(), 2);
    }

    #[test]
    fn test_adjacent() {
        let [a, b, c, d] = square();
        let mesh = two_triangle_mesh();
        assert_eq!(
            mesh.adjacent(DirectedEdge::new(a, c)),
            Some(Triangle::new(a, b, c))
        );
        assert_eq!(
            mesh.adjacent(DirectedEdge::new(c, a)),
            Some(Triangle::new(a, c, d))
        );
        assert_eq!(mesh.adjacent(DirectedEdge::new(a, b)), None);
    }

    #[test]
    fn test_all_adjacent() {
        let [a, b, c, d] = square();
        let mesh = two_triangle_mesh();
        assert_eq!(
            mesh.all_adjacent(&Triangle::new(a, b, c)),
            vec![Triangle::new(a, c, d)]
        );
        assert_eq!(
            mesh.all_adjacent(&Triangle::new(a, c, d)),
            vec![Triangle::new(a, b, c)]
        );
    }

    #[test]
    fn test_owner() {
        let [a, b, c, _] = square();
        let mesh = two_triangle_mesh();
        assert_eq!(
            mesh.owner(DirectedEdge::new(b, c)),
            Some(Triangle::new(a, b, c))
        );
        assert_eq!(mesh.owner(DirectedEdge::new(c, b)), None);
    }

    #[test]
    fn test_remove_incident() {
        let [a, b, _, d] = square();
        let mut mesh = two_triangle_mesh();
        assert_eq!(mesh.remove_incident(&[d]).unwrap(), 1);
        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.remove_incident(&[a, b]).unwrap(), 1);
        assert!(mesh.is_empty());
        assert_eq!(mesh.edge_count(), 0);
    }

    #[test]
    fn test_consistency_over_many_operations() {
        let [a, b, c, d] = square();
        let center = Point2::new(0.5, 0.5);
        let mut mesh = two_triangle_mesh();

        mesh.remove(&Triangle::new(a, b, c)).unwrap();
        mesh.remove(&Triangle::new(a, c, d)).unwrap();
        for (p, q) in [(a, b), (b, c), (c, d), (d, a)] {
            mesh.add(Triangle::new(center, p, q)).unwrap();
            mesh.check_consistency().unwrap();
        }

        assert_eq!(mesh.len(), 4);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.all_adjacent(&Triangle::new(center, a, b)).len(), 2);
    }
}
