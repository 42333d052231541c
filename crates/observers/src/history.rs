use numkit_core::Observer;

use crate::traits::{HasIter, HasResidual};

/// One observed iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration count reported by the event (see [`HasIter`]).
    pub iter: usize,

    /// Convergence measure reported by the event.
    pub residual: f64,
}

/// An observer that records the convergence history of any solver whose
/// events carry an iteration counter and a residual.
///
/// `History` never steers the solver. Pass it by mutable reference to keep
/// the records after the solve returns:
///
/// ```rust
/// use numkit_observers::History;
/// use numkit_solvers::roots::{Config, bisection};
///
/// let mut history = History::new();
/// let f = |x: f64| x * x - 2.0;
/// bisection::solve(&f, [0.0, 2.0], &Config::default(), &mut history).unwrap();
///
/// assert!(!history.is_empty());
/// assert_eq!(history.records()[0].iter, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records in the order they were observed.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if the absolute residual never increased between
    /// consecutive records.
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        self.records
            .windows(2)
            .all(|pair| pair[1].residual.abs() <= pair[0].residual.abs())
    }

    /// Consumes the history and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIter + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iter(),
            residual: event.residual(),
        });
        None
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasIter + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
