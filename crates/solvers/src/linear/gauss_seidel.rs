//! Gauss-Seidel relaxation for square linear systems.
//!
//! # Algorithm
//!
//! Starting from `x = 0`, each sweep updates every component in place:
//!
//! ```text
//! x[i] = (b[i] - Σ_{j≠i} A[i][j]·x[j]) / A[i][i]
//! ```
//!
//! Updates use the most recent values of `x`, so later rows in a sweep
//! already see the new values of earlier rows. A sweep converges when every
//! component moved by less than the configured tolerance.
//!
//! Convergence is guaranteed for strictly diagonally dominant systems. For
//! other systems the solver may hit the sweep limit, in which case it still
//! returns the last iterate with [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! One [`Event`] per sweep, emitted before the convergence check.
//! Observers can return [`Action::StopEarly`] to end the solve with the
//! current iterate.

mod config;
mod error;
mod event;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use numkit_core::{Matrix, Observer};

/// Solves the augmented system `[A | b]` by Gauss-Seidel relaxation.
///
/// # Errors
///
/// Returns [`Error::NotAugmented`] if `system` is not `n × (n + 1)`, or
/// [`Error::ZeroDiagonal`] if any diagonal entry of `A` is zero.
pub fn solve<Obs>(system: &Matrix, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let n = validate(system)?;

    let mut x = vec![0.0; n];
    let mut previous = vec![0.0; n];
    let mut max_change = f64::INFINITY;

    for sweep in 1..=config.max_iters() {
        previous.copy_from_slice(&x);

        for (i, row) in system.rows().enumerate() {
            let off_diagonal: f64 = row[..n]
                .iter()
                .zip(&x)
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, (a, xj))| a * xj)
                .sum();
            x[i] = (row[n] - off_diagonal) / row[i];
        }

        max_change = x
            .iter()
            .zip(&previous)
            .map(|(new, old)| (new - old).abs())
            .fold(0.0, f64::max);

        let event = Event {
            sweep,
            x: &x,
            max_change,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                max_change,
                iters: sweep,
            });
        }

        if x
            .iter()
            .zip(&previous)
            .all(|(new, old)| (new - old).abs() < config.tolerance())
        {
            return Ok(Solution {
                status: Status::Converged,
                x,
                max_change,
                iters: sweep,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        max_change,
        iters: config.max_iters(),
    })
}

/// Solves the augmented system without observation.
///
/// # Errors
///
/// Returns an error if the system is malformed; see [`solve`].
pub fn solve_unobserved(system: &Matrix, config: &Config) -> Result<Solution, Error> {
    solve(system, config, ())
}

/// Checks the augmented shape and diagonal, returning the system size.
fn validate(system: &Matrix) -> Result<usize, Error> {
    let n = system.nrows();
    if system.ncols() != n + 1 {
        return Err(Error::NotAugmented {
            rows: n,
            cols: system.ncols(),
        });
    }

    #[allow(clippy::float_cmp)]
    if let Some(row) = (0..n).find(|&i| system[[i, i]] == 0.0) {
        return Err(Error::ZeroDiagonal { row });
    }

    Ok(n)
}
