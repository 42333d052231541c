//! Solvers for scalar root finding: locating `x` with `f(x) = 0`.
//!
//! All five methods share one [`Config`], one [`Error`] taxonomy, one
//! [`Event`] type, and one [`Solution`] type, so callers can swap strategies
//! without changing how results and failures are handled.
//!
//! # Solvers
//!
//! - [`bisection`] - guaranteed convergence on a bracketed interval
//! - [`false_position`] - bracketed, secant-line interior point
//! - [`fixed_point`] - iterates `x = g(x)`, no bracket required
//! - [`newton`] - quadratic convergence from a starting point, needs `f'`
//! - [`brent`] - bracketed, mixes bisection, secant, and inverse quadratic
//!   interpolation
//!
//! # Observer Events
//!
//! Every method emits one [`Event`] per iteration, before its stopping test.
//! Observers can return [`Action::StopEarly`] to end the search with the
//! current estimate and [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub mod bisection;
pub mod brent;
pub mod false_position;
pub mod fixed_point;
pub mod newton;

pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
