//! Core traits and types for the numkit solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] - a scalar-to-scalar callable evaluated by a solver
//! - [`Differentiable`] - a [`Function`] that also provides its derivative
//! - [`Observer`] - receives solver events and optionally returns control actions
//! - [`Matrix`] - a dense row-major matrix stored in one flat buffer

mod function;
mod matrix;
mod observer;

pub use function::{Differentiable, Function, WithDerivative};
pub use matrix::{Matrix, MatrixError};
pub use observer::Observer;
