//! Delaunay triangulation of planar point sets.
//!
//! The mesh stores triangles by value in canonical form, with an index from
//! each directed edge to the vertex opposite it. Points are inserted one at
//! a time after a point-location walk, either by splitting and flipping
//! ([`legalize`]) or by Bowyer-Watson cavity retriangulation ([`cavity`]).

pub mod cavity;
mod delaunay;
pub mod legalize;
mod locate;
mod mesh;
mod ordering;
mod outer;
mod triangle;
mod validate;

pub use delaunay::{
    delaunay_triangulation, delaunay_triangulation_with, DelaunayConfig, IncrementalDelaunay,
    InsertionVariant,
};
pub use locate::{Location, Locator};
pub use mesh::Mesh;
pub use ordering::{angular_cmp, sort_around};
pub use outer::{OuterTriangle, VertexRank};
pub use triangle::{DirectedEdge, Triangle};
pub use validate::{covers_all_points, first_violation, is_delaunay};
