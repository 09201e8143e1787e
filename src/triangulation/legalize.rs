//! Edge-flip insertion: split the containing triangle, then legalize.
//!
//! After a point is inserted by splitting one triangle (interior case) or
//! the two triangles on either side of an edge (edge case), every new
//! triangle contributes its edge opposite the point as a candidate. An
//! illegal candidate is flipped, and the two far edges of the flipped
//! quadrilateral become candidates in turn. Candidates are kept on an
//! explicit stack rather than in recursive calls.

use super::locate::Locator;
use super::mesh::Mesh;
use super::outer::{OuterTriangle, VertexRank};
use super::triangle::{DirectedEdge, Triangle};
use crate::error::TriangulationError;
use crate::primitives::Point2;
use crate::tolerance::{in_circumcircle, orient2d, Orientation};
use log::trace;
use num_traits::Float;

/// Legality of an edge with at least one super-triangle vertex among the
/// quadrilateral `a, b, c, d`, where `b-c` is the tested diagonal.
///
/// Returns true if the edge is illegal.
pub fn outer_rule(a: VertexRank, b: VertexRank, c: VertexRank, d: VertexRank) -> bool {
    let on_edge = usize::from(b.is_outer()) + usize::from(c.is_outer());
    let opposite = usize::from(a.is_outer()) + usize::from(d.is_outer());

    match (on_edge, opposite) {
        // Never flip the super-triangle's own edges.
        (2, _) => false,
        (1, 0) => true,
        (0, _) => false,
        _ => b.min(c) > a.min(d),
    }
}

/// Tests whether the directed edge `b -> c` is illegal.
///
/// `a` is the vertex opposite the edge in the triangle owning it and `d`
/// the vertex opposite the reversed edge. Boundary edges are legal. With
/// only input points involved the edge is illegal iff `d` lies in the
/// closed circumdisk of `a, b, c`; otherwise [`outer_rule`] decides.
pub fn is_illegal<F: Float>(
    mesh: &Mesh<F>,
    outer: &OuterTriangle<F>,
    edge: DirectedEdge<F>,
    eps: F,
) -> Result<bool, TriangulationError> {
    let (Some(a), Some(d)) = (
        mesh.opposite_vertex(edge),
        mesh.opposite_vertex(edge.reversed()),
    ) else {
        return Ok(false);
    };
    let (b, c) = (edge.from, edge.to);

    let ranks = [outer.rank(a), outer.rank(b), outer.rank(c), outer.rank(d)];
    if ranks.iter().all(|r| !r.is_outer()) {
        return in_circumcircle(a, b, c, d, eps);
    }
    Ok(outer_rule(ranks[0], ranks[1], ranks[2], ranks[3]))
}

/// Returns true if replacing diagonal `b-c` by `a-d` yields two properly
/// oriented triangles, i.e. `a, b, d, c` is a strictly convex quadrilateral.
#[inline]
fn flippable<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, d: Point2<F>, eps: F) -> bool {
    orient2d(a, b, d, eps) == Orientation::CounterClockwise
        && orient2d(a, d, c, eps) == Orientation::CounterClockwise
}

/// Restores the Delaunay property around `p` after a split.
///
/// `edges` are the directed edges opposite `p` in the triangles just
/// created. Returns the number of flips performed.
///
/// A candidate whose quadrilateral is not strictly convex in real
/// coordinates is left alone even when the outer rule calls it illegal.
pub fn legalize<F: Float>(
    mesh: &mut Mesh<F>,
    outer: &OuterTriangle<F>,
    p: Point2<F>,
    edges: &[DirectedEdge<F>],
    eps: F,
) -> Result<usize, TriangulationError> {
    let mut stack: Vec<DirectedEdge<F>> = edges.iter().rev().copied().collect();
    let mut flips = 0;

    while let Some(edge) = stack.pop() {
        // Already replaced by an earlier flip.
        if mesh.opposite_vertex(edge) != Some(p) {
            continue;
        }
        if !is_illegal(mesh, outer, edge, eps)? {
            continue;
        }

        let (b, c) = (edge.from, edge.to);
        let d = mesh
            .opposite_vertex(edge.reversed())
            .ok_or(TriangulationError::MissingNeighbor)?;
        if !flippable(p, b, c, d, eps) {
            trace!("skipping flip of reflex quadrilateral");
            continue;
        }

        mesh.remove(&Triangle::new(p, b, c))?;
        mesh.remove(&Triangle::new(c, b, d))?;
        mesh.add(Triangle::new(p, b, d))?;
        mesh.add(Triangle::new(p, d, c))?;
        flips += 1;

        stack.push(DirectedEdge::new(d, c));
        stack.push(DirectedEdge::new(b, d));
    }

    Ok(flips)
}

/// Splits `triangle` into three around the interior point `p`.
///
/// Returns the three edges opposite `p`.
pub fn split_interior<F: Float>(
    mesh: &mut Mesh<F>,
    triangle: &Triangle<F>,
    p: Point2<F>,
) -> Result<[DirectedEdge<F>; 3], TriangulationError> {
    let [a, b, c] = triangle.vertices();
    mesh.remove(triangle)?;
    mesh.add(Triangle::new(p, a, b))?;
    mesh.add(Triangle::new(p, b, c))?;
    mesh.add(Triangle::new(p, c, a))?;
    Ok(triangle.edges())
}

/// Splits both triangles sharing `edge` into two each, around `p` on that
/// edge.
///
/// `edge` must be a directed edge of `triangle`. Returns the four edges
/// opposite `p`.
pub fn split_on_edge<F: Float>(
    mesh: &mut Mesh<F>,
    triangle: &Triangle<F>,
    edge: DirectedEdge<F>,
    p: Point2<F>,
) -> Result<[DirectedEdge<F>; 4], TriangulationError> {
    let (u, v) = (edge.from, edge.to);
    let w = triangle
        .opposite(edge)
        .ok_or(TriangulationError::TriangleNotFound)?;
    let x = mesh
        .opposite_vertex(edge.reversed())
        .ok_or(TriangulationError::MissingNeighbor)?;

    mesh.remove(triangle)?;
    mesh.remove(&Triangle::new(v, u, x))?;
    mesh.add(Triangle::new(p, v, w))?;
    mesh.add(Triangle::new(p, w, u))?;
    mesh.add(Triangle::new(p, u, x))?;
    mesh.add(Triangle::new(p, x, v))?;

    Ok([
        DirectedEdge::new(v, w),
        DirectedEdge::new(w, u),
        DirectedEdge::new(u, x),
        DirectedEdge::new(x, v),
    ])
}

/// Inserts `p` by splitting its containing triangle (or the two triangles
/// on the edge it lies on) and legalizing the new edges.
///
/// Returns the number of flips performed.
pub fn insert_with_flips<F: Float>(
    mesh: &mut Mesh<F>,
    locator: &mut Locator<F>,
    outer: &OuterTriangle<F>,
    p: Point2<F>,
    eps: F,
) -> Result<usize, TriangulationError> {
    let location = locator.locate(mesh, p, eps)?;

    let flips = match location.on_edge {
        None => {
            trace!("interior split");
            let edges = split_interior(mesh, &location.triangle, p)?;
            legalize(mesh, outer, p, &edges, eps)?
        }
        Some(edge) => {
            trace!("on-edge split");
            let edges = split_on_edge(mesh, &location.triangle, edge, p)?;
            legalize(mesh, outer, p, &edges, eps)?
        }
    };

    // Spokes from p survive every flip, so this always finds a triangle.
    let [a, _, _] = location.triangle.vertices();
    if let Some(t) = mesh.owner(DirectedEdge::new(p, a)) {
        locator.set_hint(t);
    }

    Ok(flips)
}
