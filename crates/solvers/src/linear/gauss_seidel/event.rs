use std::fmt;

/// Event emitted once per sweep, before the convergence check.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Sweep counter (1-based).
    pub sweep: usize,

    /// The iterate after this sweep.
    pub x: &'a [f64],

    /// Largest absolute component change relative to the previous sweep.
    pub max_change: f64,
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sweep {:>4}: x = [", self.sweep)?;
        for (i, value) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.6}")?;
        }
        write!(f, "] max change {:.3e}", self.max_change)
    }
}

/// Actions an observer can take during Gauss-Seidel iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after this sweep and return the current iterate.
    StopEarly,
}
