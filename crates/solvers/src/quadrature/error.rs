/// Errors that can occur during quadrature.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The lower bound is not strictly below the upper bound, or a bound is
    /// not finite.
    #[error("invalid interval [{a}, {b}]: expected finite bounds with a < b")]
    InvalidInterval { a: f64, b: f64 },

    /// The subdivision count does not suit the rule.
    #[error("invalid subdivision count {n}: {requirement}")]
    InvalidFunction { n: usize, requirement: &'static str },

    /// Romberg ran out of rows before successive diagonal entries agreed.
    #[error("no convergence after {rows} rows (last estimate {last}, change {change:.3e})")]
    MaxIterationsReached { rows: usize, last: f64, change: f64 },
}
