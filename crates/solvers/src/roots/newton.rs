//! Newton-Raphson iteration.
//!
//! Each iteration takes the step `x_{k+1} = x_k - f(x_k) / f'(x_k)` and stops
//! when consecutive iterates are within the tolerance. Convergence is
//! quadratic near a simple root, but there is no bracket to fall back on: a
//! poor starting point can diverge or cycle.
//!
//! A derivative that evaluates to exactly zero ends the search with
//! [`Error::InvalidFunction`]. Near-zero derivatives are not guarded.

use numkit_core::{Differentiable, Observer};

use super::{Action, Config, Error, Event, Solution, Status};

/// Finds a root of `f` starting from `x0`.
///
/// Events report the iterate `x_k` and `f(x_k)` before the step is taken.
///
/// # Errors
///
/// Returns [`Error::InvalidFunction`] if `f'(x_k) == 0` at some iterate, or
/// [`Error::MaxIterationsReached`] if consecutive iterates never agree.
pub fn solve<F, Obs>(f: &F, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: Observer<Event, Action>,
{
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let fx = f.eval(x);

        let event = Event {
            iter,
            x,
            residual: fx,
            bracket: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual: fx,
                iters: iter,
            });
        }

        let slope = f.derivative(x);
        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::InvalidFunction { x });
        }

        let next = x - fx / slope;
        if (next - x).abs() < config.tolerance() {
            return Ok(Solution {
                status: Status::Converged,
                x: next,
                residual: f.eval(next),
                iters: iter,
            });
        }
        x = next;
    }

    Err(Error::MaxIterationsReached {
        iters: config.max_iters(),
        last: x,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the derivative vanishes or the iteration limit is hit.
pub fn solve_unobserved<F: Differentiable>(
    f: &F,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numkit_core::WithDerivative;

    fn shifted_square() -> impl Differentiable {
        WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x)
    }

    #[test]
    fn starting_on_root_converges_immediately() {
        let solution =
            solve_unobserved(&shifted_square(), 2.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 2.0);
        assert_relative_eq!(solution.residual, 0.0);
    }

    #[test]
    fn converges_quadratically() {
        let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);

        let solution = solve_unobserved(&f, 1.0, &Config::default()).expect("should solve");

        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(solution.iters <= 7);
    }

    #[test]
    fn zero_derivative_is_an_error() {
        let result = solve_unobserved(&shifted_square(), 0.0, &Config::default());
        assert_eq!(result, Err(Error::InvalidFunction { x: 0.0 }));
    }

    #[test]
    fn cycling_iterates_hit_limit() {
        // x³ - 2x + 2 from 0 alternates between 0 and 1.
        let f = WithDerivative::new(|x: f64| x.powi(3) - 2.0 * x + 2.0, |x: f64| 3.0 * x * x - 2.0);
        let config = Config::new(20, 1e-10).expect("valid config");

        let result = solve_unobserved(&f, 0.0, &config);

        assert_eq!(
            result,
            Err(Error::MaxIterationsReached {
                iters: 20,
                last: 0.0
            })
        );
    }

    #[test]
    fn observer_sees_iterates_before_step() {
        let mut seen = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            seen.push((event.x, event.residual));
            None
        };

        let solution = solve(&shifted_square(), 4.0, &Config::default(), observer)
            .expect("should solve");

        assert_eq!(seen[0], (4.0, 12.0));
        assert_relative_eq!(seen[1].0, 2.5);
        assert_eq!(seen.len(), solution.iters);
    }
}
