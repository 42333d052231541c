/// Indicates whether the sweeps converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every component changed by less than the tolerance in the last sweep.
    Converged,

    /// Reached the sweep limit without converging.
    ///
    /// The solution still holds the last iterate, which may be inaccurate.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Gauss-Seidel solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last computed iterate.
    pub x: Vec<f64>,

    /// Largest component change in the last sweep.
    ///
    /// Infinite when no sweep ran.
    pub max_change: f64,

    /// Number of sweeps performed.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the sweeps converged within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
