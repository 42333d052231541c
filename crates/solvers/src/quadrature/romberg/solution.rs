/// Indicates why Romberg integration finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive diagonal entries agreed within the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of Romberg integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Diagonal entry of the last row built.
    pub value: f64,

    /// Number of table rows built, including row 0.
    pub rows: usize,

    /// Absolute change of the diagonal entry over the last row.
    pub change: f64,

    /// Total integrand evaluations.
    pub evals: usize,
}

impl Solution {
    /// Returns `true` if the diagonal converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
