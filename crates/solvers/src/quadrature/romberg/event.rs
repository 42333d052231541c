use std::fmt;

/// Event emitted after each row of the Romberg table is filled.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Row index (0-based). Row `i` uses `2^i` trapezoid panels.
    pub row: usize,

    /// Entries `R[i][0..=i]` of the row, ending with the diagonal estimate.
    pub entries: &'a [f64],

    /// Absolute change of the diagonal entry from the previous row.
    ///
    /// Infinite for row 0, which has no predecessor.
    pub change: f64,

    /// Integrand evaluations so far.
    pub evals: usize,
}

impl Event<'_> {
    /// Returns the diagonal entry, the row's best estimate.
    #[must_use]
    pub fn estimate(&self) -> f64 {
        self.entries.last().copied().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {:>2}:", self.row)?;
        for value in self.entries {
            write!(f, " {value:.12}")?;
        }
        write!(f, " change {:.3e} evals {}", self.change, self.evals)
    }
}

/// Actions an observer can take during Romberg integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after this row and return its diagonal estimate.
    StopEarly,
}
