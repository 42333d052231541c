/// Indicates why the root search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A stopping test passed.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at the reported root estimate (see [`Event::residual`]).
    ///
    /// [`Event::residual`]: super::Event::residual
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
