//! Fixed-point iteration `x_{k+1} = g(x_k)`.
//!
//! No bracket is needed. The caller rewrites `f(x) = 0` as `x = g(x)` and
//! supplies `g` along with a starting point; the search stops once
//! successive iterates differ by less than the tolerance.
//!
//! Convergence requires `|g'(x)| < 1` near the fixed point. A poorly chosen
//! `g` diverges or cycles until the iteration limit is hit.
//!
//! Events and the final [`Solution`] report the step `g(x) - x` as their
//! residual.

use numkit_core::{Function, Observer};

use super::{Action, Config, Error, Event, Solution, Status};

/// Iterates `g` from `x0` until successive iterates agree.
///
/// # Errors
///
/// Returns [`Error::MaxIterationsReached`] if the step never drops below the
/// tolerance.
pub fn solve<G, Obs>(g: &G, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    G: Function,
    Obs: Observer<Event, Action>,
{
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let next = g.eval(x);
        let step = next - x;
        x = next;

        let event = Event {
            iter,
            x,
            residual: step,
            bracket: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual: step,
                iters: iter,
            });
        }

        if step.abs() < config.tolerance() {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual: step,
                iters: iter,
            });
        }
    }

    Err(Error::MaxIterationsReached {
        iters: config.max_iters(),
        last: x,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the iteration limit is hit.
pub fn solve_unobserved<G: Function>(g: &G, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(g, x0, config, ())
}
