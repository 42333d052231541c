//! Bisection on a bracketed interval.
//!
//! Each iteration evaluates the midpoint and keeps the half of the bracket
//! that still contains a sign change. The search stops when the bracket's
//! half-width drops below the tolerance or the midpoint is an exact root.
//!
//! Convergence is linear but guaranteed for any continuous function whose
//! endpoint residuals differ in sign.

use numkit_core::{Function, Observer};

use super::{Action, Bracket, Config, Error, Event, Solution, Status};

/// Finds a root of `f` in `bracket` by repeated halving.
///
/// # Errors
///
/// Returns [`Error::NoRootInInterval`] if `f` does not change sign over the
/// bracket, or [`Error::MaxIterationsReached`] if the half-width never drops
/// below the tolerance.
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
    let mut last = bracket.midpoint();

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let f_mid = f.eval(mid);
        last = mid;

        let event = Event {
            iter,
            x: mid,
            residual: f_mid,
            bracket: Some(bracket.as_array()),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: mid,
                residual: f_mid,
                iters: iter,
            });
        }

        #[allow(clippy::float_cmp)]
        if f_mid == 0.0 || 0.5 * bracket.width() < config.tolerance() {
            return Ok(Solution {
                status: Status::Converged,
                x: mid,
                residual: f_mid,
                iters: iter,
            });
        }

        bracket.shrink(mid, f_mid);
    }

    Err(Error::MaxIterationsReached {
        iters: config.max_iters(),
        last,
    })
}

/// Runs bisection without observation.
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
