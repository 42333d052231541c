//! False position (regula falsi) on a bracketed interval.
//!
//! Like bisection, but the interior point is where the secant line through
//! the bracket endpoints crosses zero:
//!
//! ```text
//! c = (a·f(b) - b·f(a)) / (f(b) - f(a))
//! ```
//!
//! The search stops when the full bracket width (not the half-width used by
//! bisection) drops below the tolerance, or `f(c)` is exactly zero.
//!
//! # Limitations
//!
//! For convex or concave functions one endpoint typically never moves, so
//! the bracket width stalls at the distance from that endpoint to the root.
//! If that distance exceeds the tolerance the search ends with
//! [`Error::MaxIterationsReached`], whose `last` field still holds an
//! accurate estimate.

use numkit_core::{Function, Observer};

use super::{Action, Bracket, Config, Error, Event, Solution, Status};

/// Finds a root of `f` in `bracket` using secant-line interior points.
///
/// # Errors
///
/// Returns [`Error::NoRootInInterval`] if `f` does not change sign over the
/// bracket, or [`Error::MaxIterationsReached`] if the bracket width never
/// drops below the tolerance.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::new(f, bracket)?;
    let mut last = bracket.secant_intercept();

    for iter in 1..=config.max_iters() {
        let c = bracket.secant_intercept();
        let f_c = f.eval(c);
        last = c;

        let event = Event {
            iter,
            x: c,
            residual: f_c,
            bracket: Some(bracket.as_array()),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: c,
                residual: f_c,
                iters: iter,
            });
        }

        #[allow(clippy::float_cmp)]
        if f_c == 0.0 || bracket.width() < config.tolerance() {
            return Ok(Solution {
                status: Status::Converged,
                x: c,
                residual: f_c,
                iters: iter,
            });
        }

        bracket.shrink(c, f_c);
    }

    Err(Error::MaxIterationsReached {
        iters: config.max_iters(),
        last,
    })
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the iteration limit is hit.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
