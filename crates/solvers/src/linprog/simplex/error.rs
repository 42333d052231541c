/// Errors that can occur during simplex optimization.
///
/// Only [`Error::InvalidProblem`] is returned by the solver itself. The
/// other variants describe non-optimal outcomes and are produced by
/// [`Solution::into_optimal`].
///
/// [`Solution::into_optimal`]: super::Solution::into_optimal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The problem's parts disagree on dimensions or hold non-finite values.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// No point satisfies every constraint.
    #[error("problem is infeasible")]
    Infeasible,

    /// The objective can increase without bound.
    #[error("problem is unbounded")]
    Unbounded,

    /// The pivot budget ran out before an optimal tableau was reached.
    #[error("no optimum after {pivots} pivots")]
    MaxIterationsReached { pivots: usize },

    /// An observer stopped the solver.
    #[error("stopped by observer after {pivots} pivots")]
    StoppedByObserver { pivots: usize },
}
