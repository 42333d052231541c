/// Errors that can occur during a root search.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The interval endpoints do not bracket a sign change.
    #[error("no root in [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoRootInInterval { a: f64, b: f64, fa: f64, fb: f64 },

    /// The derivative evaluated to exactly zero.
    #[error("derivative is zero at x = {x}")]
    InvalidFunction { x: f64 },

    /// The iteration limit was reached before a stopping test passed.
    #[error("no convergence after {iters} iterations (last estimate {last})")]
    MaxIterationsReached { iters: usize, last: f64 },
}
