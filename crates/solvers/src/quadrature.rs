//! Definite-integral quadrature of scalar functions.
//!
//! Fixed rules sample the integrand on a predetermined grid and return a
//! single estimate. Romberg integration instead refines a trapezoidal
//! estimate row by row and extrapolates until successive rows agree.
//!
//! # Methods
//!
//! - [`trapezoid`] - composite trapezoidal rule, `n ≥ 1` subintervals
//! - [`simpson`] - composite Simpson 1/3 rule, `n` even
//! - [`simpson38`] - composite Simpson 3/8 rule, `n` a multiple of 3
//! - [`gauss`] - Gauss-Legendre rules with 2 to 5 nodes
//! - [`romberg`] - Richardson extrapolation over halving trapezoid panels
//!
//! Every method rejects an interval `[a, b]` unless `a < b` with both bounds
//! finite.
//!
//! # Observer Events
//!
//! Fixed rules emit one [`Sample`] per integrand evaluation. They cannot be
//! steered, so their action type is [`Infallible`]. Romberg emits one
//! [`romberg::Event`] per table row and accepts [`romberg::Action::StopEarly`].
//!
//! [`Infallible`]: std::convert::Infallible

mod error;
mod rule;
mod sample;

pub mod gauss;
pub mod romberg;
pub mod simpson;
pub mod simpson38;
pub mod trapezoid;

pub use error::Error;
pub use sample::Sample;
