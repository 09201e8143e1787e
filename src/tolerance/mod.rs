//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;

pub use predicates::{circumcircle, in_circumcircle, orient2d, Orientation, DEFAULT_EPSILON};
