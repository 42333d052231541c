use numkit_core::Observer;

use crate::traits::{CanStopEarly, HasIter};

/// An observer that stops any solver once it reports an iteration count of
/// at least `limit`.
///
/// The count follows [`HasIter`]: `StopAfter::new(k)` allows `k` root
/// iterations, `k` Gauss-Seidel sweeps, `k` Romberg rows, or `k` simplex
/// pivots. A limit of zero stops simplex before its first pivot and every
/// other solver after its first iteration.
///
/// Unlike a solver's own iteration limit, stopping here is not an error: the
/// solver returns its current estimate with a "stopped by observer" status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: usize,
}

impl StopAfter {
    /// Creates an observer that stops the solver after `limit` iterations.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Returns the iteration limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<E: HasIter, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.limit).then(A::stop_early)
    }
}
