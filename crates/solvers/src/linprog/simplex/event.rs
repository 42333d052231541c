use std::fmt;

use numkit_core::Matrix;

use crate::linprog::Problem;

/// Simplex phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Minimizing the sum of artificial variables to find a feasible basis.
    One,
    /// Maximizing the problem's objective from a feasible basis.
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::One => "phase 1",
            Self::Two => "phase 2",
        })
    }
}

/// Events emitted by the simplex solver.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The initial tableau was built.
    Started {
        problem: &'a Problem,
        tableau: &'a Matrix,
        phase: Phase,
    },

    /// A pivot was performed.
    Pivoted {
        problem: &'a Problem,
        tableau: &'a Matrix,
        phase: Phase,
        /// Pivot count so far (1-based).
        pivot: usize,
        /// Tableau column that entered the basis.
        entering: usize,
        /// Tableau row whose basic variable left (1-based; row 0 is the
        /// objective).
        leaving: usize,
    },
}

impl Event<'_> {
    /// Returns the tableau after the event.
    #[must_use]
    pub fn tableau(&self) -> &Matrix {
        match self {
            Self::Started { tableau, .. } | Self::Pivoted { tableau, .. } => tableau,
        }
    }

    /// Returns the phase the event belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Started { phase, .. } | Self::Pivoted { phase, .. } => *phase,
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started {
                problem,
                tableau,
                phase,
            } => {
                writeln!(f, "{problem}")?;
                writeln!(f, "initial tableau ({phase}):")?;
                write!(f, "{tableau}")
            }
            Self::Pivoted {
                problem,
                tableau,
                phase,
                pivot,
                entering,
                leaving,
            } => {
                writeln!(f, "{problem}")?;
                writeln!(
                    f,
                    "{phase} pivot {pivot}: entering column {entering}, leaving row {leaving}"
                )?;
                write!(f, "{tableau}")
            }
        }
    }
}

/// Actions an observer can take during simplex iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after this event and return the current basic solution.
    StopEarly,
}
