//! Linear programming.
//!
//! A [`Problem`] maximizes `c·x` over `x ≥ 0` subject to linear constraints,
//! each with its own [`Relation`]. The [`simplex`] module solves it on a
//! dense tableau.

mod problem;

pub mod simplex;

pub use problem::{Problem, Relation, VarKind};
