//! Romberg integration.
//!
//! # Algorithm
//!
//! Builds a triangular table `R` row by row:
//!
//! 1. `R[0][0]` is the single-panel trapezoid estimate `h·(f(a) + f(b))/2`.
//! 2. Row `i` halves the panel width and reuses the previous trapezoid sum,
//!    evaluating `f` only at the `2^(i-1)` new midpoints:
//!
//!    ```text
//!    R[i][0] = R[i-1][0]/2 + hᵢ·Σ f(a + (2k-1)·hᵢ)
//!    ```
//!
//! 3. Columns `1..=i` apply Richardson extrapolation:
//!
//!    ```text
//!    R[i][j] = R[i][j-1] + (R[i][j-1] - R[i-1][j-1]) / (4^j - 1)
//!    ```
//!
//! 4. The table converges when the diagonal entry moves by less than the
//!    tolerance between successive rows; `R[i][i]` is returned.
//!
//! Only two rows are kept in memory at a time.
//!
//! # Observer Events
//!
//! One [`Event`] per row, starting with row 0, emitted before the
//! convergence check. Observers can return [`Action::StopEarly`] to end
//! with the current diagonal estimate.

mod config;
mod event;
mod solution;

pub use config::{Config, ConfigError};
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use std::mem;

use numkit_core::{Function, Observer};

use super::{Error, rule};

/// Integrates `f` over `interval` by Romberg extrapolation.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b`, or
/// [`Error::MaxIterationsReached`] if the row budget runs out before the
/// diagonal converges.
pub fn integrate<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let (a, b) = rule::bounds(interval)?;

    let mut h = b - a;
    let mut evals = 2;
    let mut change = f64::INFINITY;
    let mut previous = Vec::with_capacity(config.max_rows());
    let mut current = Vec::with_capacity(config.max_rows());

    let mut value = 0.5 * h * (f.eval(a) + f.eval(b));
    previous.push(value);

    let event = Event {
        row: 0,
        entries: &previous,
        change,
        evals,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            value,
            rows: 1,
            change,
            evals,
        });
    }

    for row in 1..config.max_rows() {
        h *= 0.5;
        let new_points = 1_usize << (row - 1);
        #[allow(clippy::cast_precision_loss)]
        let midpoints: f64 = (0..new_points)
            .map(|k| f.eval(a + (2 * k + 1) as f64 * h))
            .sum();
        evals += new_points;

        current.clear();
        current.push(0.5 * previous[0] + h * midpoints);
        let mut power = 1.0;
        for j in 1..=row {
            power *= 4.0;
            let coarser = current[j - 1];
            current.push(coarser + (coarser - previous[j - 1]) / (power - 1.0));
        }

        change = (current[row] - value).abs();
        value = current[row];
        mem::swap(&mut previous, &mut current);

        let event = Event {
            row,
            entries: &previous,
            change,
            evals,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                value,
                rows: row + 1,
                change,
                evals,
            });
        }

        if change < config.tolerance() {
            return Ok(Solution {
                status: Status::Converged,
                value,
                rows: row + 1,
                change,
                evals,
            });
        }
    }

    Err(Error::MaxIterationsReached {
        rows: config.max_rows(),
        last: value,
        change,
    })
}

/// Integrates `f` without observation.
///
/// # Errors
///
/// See [`integrate`].
pub fn integrate_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    integrate(f, interval, config, ())
}
