//! Two-phase simplex on a dense tableau.
//!
//! # Algorithm
//!
//! 1. **Build**: one row per constraint plus the objective row. Rows with a
//!    negative right-hand side are negated (their relation flips). Each
//!    constraint gets a slack (`≤`) or surplus (`≥`) column, and every `≥` or
//!    `=` row also gets an artificial column. A problem whose constraints are
//!    all `≤` with non-negative right-hand sides yields the classic
//!    `(m + 1) × (n + m + 1)` tableau and starts directly in phase two.
//! 2. **Entering column**: the most negative reduced cost in row 0 among the
//!    decision and slack columns. None means the phase is optimal.
//! 3. **Leaving row**: the minimum ratio `rhs / entry` over rows with a
//!    positive entry in the entering column. None means unbounded.
//! 4. **Pivot**: divide the leaving row by the pivot element and eliminate the
//!    entering column from every other row.
//! 5. **Phase one** maximizes the negated sum of artificials. If the optimum
//!    is below zero the problem is infeasible. Otherwise artificials are
//!    pivoted out of the basis, the real objective is installed, and phase
//!    two continues from that basis.
//! 6. **Extraction**: a basic decision variable takes the right-hand side of
//!    the row it is basic in; all others are zero. The basis is tracked
//!    through every pivot, so a non-basic column that happens to be a unit
//!    column still reads as zero. The objective is the right-hand side of
//!    row 0.
//!
//! Ties in both selection rules go to the first candidate. There is no
//! anti-cycling rule; the pivot budget bounds degenerate cycling.
//!
//! # Limitations
//!
//! - **Continuous only**: [`VarKind::Integer`] is recorded but not enforced
//! - **Dense**: every pivot touches the whole tableau
//!
//! # Observer Events
//!
//! - [`Event::Started`] once when the initial tableau is built, and again when
//!   phase two begins after a phase-one solve
//! - [`Event::Pivoted`] after every pivot, with the entering column and
//!   leaving row
//!
//! Observers can return [`Action::StopEarly`] to end with the current basic
//! solution and [`Status::StoppedByObserver`].
//!
//! [`VarKind::Integer`]: crate::linprog::VarKind::Integer

mod config;
mod error;
mod event;
mod solution;
mod tableau;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event, Phase};
pub use solution::{Solution, Status};

use numkit_core::Observer;

use crate::linprog::Problem;

use tableau::{Step, Tableau};

/// Maximizes `problem` with the two-phase simplex method.
///
/// Non-optimal outcomes (infeasible, unbounded, pivot budget exhausted, or
/// stopped by the observer) are reported through [`Solution::status`]; use
/// [`Solution::into_optimal`] to turn them into errors.
///
/// # Errors
///
/// Returns [`Error::InvalidProblem`] if the problem's dimensions disagree or
/// it holds non-finite values.
pub fn solve<Obs>(problem: &Problem, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    problem.validate().map_err(Error::InvalidProblem)?;

    let mut tableau = Tableau::new(problem, config.feasibility_tol());
    let mut pivots = 0;
    let finish = |tableau: &Tableau, status: Status, pivots: usize| {
        Ok(tableau.solution(&problem.objective, status, pivots))
    };

    let event = Event::Started {
        problem,
        tableau: tableau.matrix(),
        phase: tableau.phase(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return finish(&tableau, Status::StoppedByObserver, pivots);
    }

    loop {
        match tableau.select() {
            Step::Optimal if tableau.phase() == Phase::One => {
                if tableau.is_infeasible() {
                    return finish(&tableau, Status::Infeasible, pivots);
                }
                tableau.start_phase_two(&problem.objective);

                let event = Event::Started {
                    problem,
                    tableau: tableau.matrix(),
                    phase: tableau.phase(),
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return finish(&tableau, Status::StoppedByObserver, pivots);
                }
            }
            Step::Optimal => return finish(&tableau, Status::Optimal, pivots),
            Step::Unbounded => return finish(&tableau, Status::Unbounded, pivots),
            Step::Pivot { entering, leaving } => {
                if pivots == config.max_iters() {
                    return finish(&tableau, Status::IterationLimitExceeded, pivots);
                }
                tableau.pivot(leaving, entering);
                pivots += 1;

                let event = Event::Pivoted {
                    problem,
                    tableau: tableau.matrix(),
                    phase: tableau.phase(),
                    pivot: pivots,
                    entering,
                    leaving,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return finish(&tableau, Status::StoppedByObserver, pivots);
                }
            }
        }
    }
}

/// Maximizes `problem` without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(problem: &Problem, config: &Config) -> Result<Solution, Error> {
    solve(problem, config, ())
}
