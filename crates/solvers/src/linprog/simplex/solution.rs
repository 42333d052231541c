use super::Error;

/// Indicates how the simplex solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No reduced cost is negative; the basic solution is optimal.
    Optimal,

    /// Phase one could not drive the artificial variables to zero.
    Infeasible,

    /// An entering column had no positive entry for the ratio test.
    Unbounded,

    /// The pivot budget ran out.
    IterationLimitExceeded,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a simplex solve.
///
/// `x` and `objective` describe the basic solution of the final tableau.
/// They are only optimal when `status` is [`Status::Optimal`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Decision variable values.
    pub x: Vec<f64>,

    /// Objective value `c·x`.
    pub objective: f64,

    /// Pivots performed across both phases.
    pub pivots: usize,
}

impl Solution {
    /// Returns `true` if the solution is optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Returns the solution if optimal, or the matching error otherwise.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] variant corresponding to a non-optimal status.
    pub fn into_optimal(self) -> Result<Self, Error> {
        match self.status {
            Status::Optimal => Ok(self),
            Status::Infeasible => Err(Error::Infeasible),
            Status::Unbounded => Err(Error::Unbounded),
            Status::IterationLimitExceeded => Err(Error::MaxIterationsReached {
                pivots: self.pivots,
            }),
            Status::StoppedByObserver => Err(Error::StoppedByObserver {
                pivots: self.pivots,
            }),
        }
    }
}
