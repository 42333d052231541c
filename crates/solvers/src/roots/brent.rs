//! Brent's method on a bracketed interval.
//!
//! Brent-Dekker root finding keeps three points:
//!
//! - `b`: the current best estimate, with the smallest `|f|`
//! - `a`: the previous value of `b`
//! - `c`: the bracket endpoint opposite `b`, so `f(b)` and `f(c)` differ in sign
//!
//! Each iteration tries an interpolated step (secant when only two distinct
//! points are known, inverse quadratic otherwise) and accepts it only if it
//! stays well inside the bracket and shrinks faster than the step before
//! last. Otherwise it bisects. This keeps bisection's guarantee while
//! usually converging superlinearly.
//!
//! The search stops when half the distance from `b` to `c` is within
//! `2·ε·|b| + tolerance/2`, where `ε` is machine epsilon, or `f(b)` is
//! exactly zero.

use numkit_core::{Function, Observer};

use super::{Action, Bracket, Config, Error, Event, Solution, Status};

/// Finds a root of `f` in `bracket` with Brent-Dekker iteration.
///
/// Events report `b` as the current estimate, along with the bracket
/// spanned by `b` and `c`.
///
/// # Errors
///
/// Returns [`Error::NoRootInInterval`] if `f` does not change sign over the
/// bracket, or [`Error::MaxIterationsReached`] if the stopping test never
/// passes.
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
    let bracket = Bracket::new(f, bracket)?;
    let [mut a, mut b] = bracket.as_array();
    let [mut fa, mut fb] = bracket.residuals();
    let (mut c, mut fc) = (b, fb);
    let mut d = b - a;
    let mut e = d;

    for iter in 1..=config.max_iters() {
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            (a, b, c) = (b, c, b);
            (fa, fb, fc) = (fb, fc, fb);
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance();
        let half = 0.5 * (c - b);

        let event = Event {
            iter,
            x: b,
            residual: fb,
            bracket: Some([b.min(c), b.max(c)]),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: b,
                residual: fb,
                iters: iter,
            });
        }

        #[allow(clippy::float_cmp)]
        if half.abs() <= tol || fb == 0.0 {
            return Ok(Solution {
                status: Status::Converged,
                x: b,
                residual: fb,
                iters: iter,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let (p, q) = interpolate(a, b, c, fa, fb, fc, half);
            let bound = (3.0 * half * q - (tol * q).abs()).min((e * q).abs());
            if 2.0 * p < bound {
                e = d;
                d = p / q;
            } else {
                d = half;
                e = d;
            }
        } else {
            d = half;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(half) };
        fb = f.eval(b);
    }

    Err(Error::MaxIterationsReached {
        iters: config.max_iters(),
        last: b,
    })
}

/// Runs Brent's method without observation.
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

/// Returns the interpolated step as `p / q`, with `p` non-negative.
///
/// Uses the secant through `a` and `b` when `a == c`, and inverse quadratic
/// interpolation through all three points otherwise.
#[allow(clippy::float_cmp, clippy::too_many_arguments)]
fn interpolate(a: f64, b: f64, c: f64, fa: f64, fb: f64, fc: f64, half: f64) -> (f64, f64) {
    let s = fb / fa;
    let (p, q) = if a == c {
        (2.0 * half * s, 1.0 - s)
    } else {
        let q = fa / fc;
        let r = fb / fc;
        (
            s * (2.0 * half * q * (q - r) - (b - a) * (r - 1.0)),
            (q - 1.0) * (r - 1.0) * (s - 1.0),
        )
    };

    if p > 0.0 { (p, -q) } else { (-p, q) }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::roots::bisection;

    #[test]
    fn finds_real_root_of_cubic() {
        let f = |x: f64| x.powi(3) - x - 1.0;
        let config = Config::default();

        let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");
        let halving = bisection::solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 1.324_717_957_244_746, epsilon = 1e-9);
        assert!(solution.iters < halving.iters);
    }

    #[test]
    fn secant_step_lands_on_linear_root() {
        let f = |x: f64| x - 1.0;

        let solution = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should solve");

        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.x, 1.0);
        assert_relative_eq!(solution.residual, 0.0);
    }

    #[test]
    fn errors_without_sign_change() {
        let f = |x: f64| x.exp();
        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());
        assert!(matches!(result, Err(Error::NoRootInInterval { .. })));
    }

    #[test]
    fn errors_when_iterations_run_out() {
        let f = |x: f64| x.powi(3) - x - 1.0;
        let config = Config::new(3, 1e-14).expect("valid config");

        let result = solve_unobserved(&f, [1.0, 2.0], &config);

        assert!(matches!(
            result,
            Err(Error::MaxIterationsReached { iters: 3, .. })
        ));
    }

    #[test]
    fn reported_bracket_always_contains_estimate() {
        let f = |x: f64| x.cos() - x;
        let mut events = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            events.push(*event);
            None
        };

        let solution = solve(&f, [0.0, 1.0], &Config::default(), observer).expect("should solve");

        assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-9);
        for event in &events {
            let [left, right] = event.bracket.expect("brent reports its bracket");
            assert!(left <= event.x && event.x <= right);
        }
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = |x: f64| x.powi(3) - x - 1.0;
        let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

        let solution = solve(&f, [1.0, 2.0], &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }
}
