//! Classical iterative numerical solvers.
//!
//! Each family is independent and shares only conventions: bounded
//! iteration, validated configs, a closed `Error` enum per family, and
//! observer hooks in place of console output.
//!
//! - [`linear`] - Gauss-Seidel relaxation for square linear systems
//! - [`roots`] - bisection, false position, fixed point, Newton-Raphson, Brent
//! - [`quadrature`] - trapezoidal, Simpson, Romberg, Gauss-Legendre
//! - [`linprog`] - two-phase simplex on a dense tableau

pub mod linear;
pub mod linprog;
pub mod quadrature;
pub mod roots;
