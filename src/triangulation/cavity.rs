//! Bowyer–Watson insertion: carve out the cavity, then re-fan it.
//!
//! Super-triangle vertices take part as points at infinity. A triangle with
//! one of them has a half-plane for a circumdisk, and a triangle with two
//! has a half-plane anchored at its input vertex. Triangles along the hull
//! of the input are thus decided as if the super-triangle were infinitely
//! large.

use super::locate::Locator;
use super::mesh::Mesh;
use super::ordering::sort_around;
use super::outer::OuterTriangle;
use super::triangle::{DirectedEdge, Triangle};
use crate::error::TriangulationError;
use crate::primitives::{Point2, Vec2};
use crate::tolerance::{orient2d, Orientation};
use log::trace;
use num_traits::Float;
use std::collections::{HashSet, VecDeque};

/// Tests whether `p` conflicts with `triangle`, i.e. lies in its
/// circumdisk with super-triangle vertices sent to infinity.
///
/// - No outer vertex: the closed circumdisk.
/// - One outer vertex: the open half-plane beyond the opposite edge, plus
///   the open edge.
/// - Two outer vertices: the higher rank recedes first. The disk becomes
///   the half-plane bounded by the line through the input vertex along the
///   lower-ranked direction, on the side of the higher-ranked one, plus the
///   open ray along that line.
/// - Three: the super-triangle contains everything.
pub fn in_conflict<F: Float>(
    triangle: &Triangle<F>,
    outer: &OuterTriangle<F>,
    p: Point2<F>,
    eps: F,
) -> Result<bool, TriangulationError> {
    let vertices = triangle.vertices();
    let ranks = vertices.map(|v| outer.rank(v));

    match ranks.iter().filter(|r| r.is_outer()).count() {
        0 => triangle.circumcircle_contains(p, eps),
        1 => {
            let i = ranks.iter().position(|r| r.is_outer()).unwrap_or(0);
            let (u, v) = (vertices[(i + 1) % 3], vertices[(i + 2) % 3]);
            Ok(beyond_edge(u, v, p, eps))
        }
        2 => {
            let i = ranks.iter().position(|r| !r.is_outer()).unwrap_or(0);
            let (x, y) = (ranks[(i + 1) % 3], ranks[(i + 2) % 3]);
            let (lower, higher) = if x < y { (x, y) } else { (y, x) };
            let (Some(along), Some(toward)) = (lower.direction(), higher.direction()) else {
                return Ok(false);
            };
            Ok(beyond_ray(vertices[i], along, toward, p, eps))
        }
        _ => Ok(true),
    }
}

/// `p` is strictly left of `u -> v` or strictly between `u` and `v`.
fn beyond_edge<F: Float>(u: Point2<F>, v: Point2<F>, p: Point2<F>, eps: F) -> bool {
    match orient2d(u, v, p, eps) {
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
        Orientation::Collinear => {
            let t = (p - u).dot(v - u);
            t > F::zero() && t < (v - u).magnitude_squared()
        }
    }
}

/// `p` is on the `toward` side of the line through `w` along `along`, or
/// on the open ray from `w` along `along`.
fn beyond_ray<F: Float>(
    w: Point2<F>,
    along: Vec2<F>,
    toward: Vec2<F>,
    p: Point2<F>,
    eps: F,
) -> bool {
    let tip = w + along;
    match orient2d(w, tip, p, eps) {
        Orientation::Collinear => (p - w).dot(along) > F::zero(),
        side => side == orient2d(w, tip, w + toward, eps),
    }
}

/// Collects the triangles in conflict with `p` (see [`in_conflict`]).
///
/// Growth starts from `seeds` and crosses an edge only out of a triangle
/// already accepted into the cavity. A rejected triangle is never expanded,
/// so the cavity stays edge-connected. The result is then widened across
/// any boundary edge that does not face `p`, so that fanning the boundary
/// around `p` only creates counter-clockwise triangles.
pub fn find_cavity<F: Float>(
    mesh: &Mesh<F>,
    outer: &OuterTriangle<F>,
    seeds: &[Triangle<F>],
    p: Point2<F>,
    eps: F,
) -> Result<Vec<Triangle<F>>, TriangulationError> {
    let mut visited: HashSet<Triangle<F>> = seeds.iter().copied().collect();
    let mut queue = VecDeque::new();
    let mut cavity = seeds.to_vec();
    for seed in seeds {
        enqueue_neighbors(mesh, seed, &mut visited, &mut queue);
    }

    while let Some(triangle) = queue.pop_front() {
        if !in_conflict(&triangle, outer, p, eps)? {
            continue;
        }
        enqueue_neighbors(mesh, &triangle, &mut visited, &mut queue);
        cavity.push(triangle);
    }

    let mut members: HashSet<Triangle<F>> = cavity.iter().copied().collect();
    loop {
        let hidden: Vec<Triangle<F>> = boundary_edges(mesh, &members)
            .into_iter()
            .filter(|e| orient2d(e.from, e.to, p, eps) != Orientation::CounterClockwise)
            .filter_map(|e| mesh.adjacent(e))
            .collect();
        if hidden.is_empty() {
            break;
        }
        trace!("widening cavity past {} hidden edges", hidden.len());
        for triangle in hidden {
            if members.insert(triangle) {
                cavity.push(triangle);
            }
        }
    }

    Ok(cavity)
}

fn enqueue_neighbors<F: Float>(
    mesh: &Mesh<F>,
    triangle: &Triangle<F>,
    visited: &mut HashSet<Triangle<F>>,
    queue: &mut VecDeque<Triangle<F>>,
) {
    for neighbor in mesh.all_adjacent(triangle) {
        if visited.insert(neighbor) {
            queue.push_back(neighbor);
        }
    }
}

/// Directed edges of `members` whose far side is not in `members`.
fn boundary_edges<F: Float>(
    mesh: &Mesh<F>,
    members: &HashSet<Triangle<F>>,
) -> Vec<DirectedEdge<F>> {
    members
        .iter()
        .flat_map(|t| t.edges())
        .filter(|e| {
            mesh.adjacent(*e)
                .map_or(true, |neighbor| !members.contains(&neighbor))
        })
        .collect()
}

/// Removes `cavity` from the mesh and fans its boundary around `p`.
///
/// Returns the sorted ring of boundary vertices.
pub fn retriangulate<F: Float>(
    mesh: &mut Mesh<F>,
    cavity: &[Triangle<F>],
    p: Point2<F>,
) -> Result<Vec<Point2<F>>, TriangulationError> {
    let members: HashSet<Triangle<F>> = cavity.iter().copied().collect();
    let mut seen = HashSet::new();
    let mut ring: Vec<Point2<F>> = boundary_edges(mesh, &members)
        .into_iter()
        .map(|e| e.from)
        .filter(|v| seen.insert(*v))
        .collect();

    for triangle in &members {
        mesh.remove(triangle)?;
    }

    sort_around(p, &mut ring);
    let n = ring.len();
    for i in 0..n {
        mesh.add(Triangle::new(p, ring[i], ring[(i + n - 1) % n]))?;
    }

    Ok(ring)
}

/// Inserts `p` by Bowyer–Watson cavity retriangulation.
///
/// Handles interior and on-edge points alike. For an on-edge point the
/// triangle across that edge also seeds the cavity, since `p` sits on the
/// boundary of its circumdisk. Returns the number of triangles removed.
pub fn insert_cavity<F: Float>(
    mesh: &mut Mesh<F>,
    locator: &mut Locator<F>,
    outer: &OuterTriangle<F>,
    p: Point2<F>,
    eps: F,
) -> Result<usize, TriangulationError> {
    let location = locator.locate(mesh, p, eps)?;

    let mut seeds = vec![location.triangle];
    if let Some(neighbor) = location.on_edge.and_then(|e| mesh.adjacent(e)) {
        seeds.push(neighbor);
    }

    let cavity = find_cavity(mesh, outer, &seeds, p, eps)?;
    trace!("cavity of {} triangles", cavity.len());

    let ring = retriangulate(mesh, &cavity, p)?;
    if let Some(t) = ring
        .first()
        .and_then(|&v| mesh.owner(DirectedEdge::new(p, v)))
    {
        locator.set_hint(t);
    }

    Ok(cavity.len())
}
