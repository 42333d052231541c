//! Composite Simpson 1/3 rule.
//!
//! ```text
//! ∫ f ≈ h/3·(f(x₀) + 4f(x₁) + 2f(x₂) + 4f(x₃) + … + 4f(xₙ₋₁) + f(xₙ))
//! ```
//!
//! Requires an even number of subintervals. Exact for polynomials up to
//! degree three; the error shrinks as `O(h⁴)`.

use std::convert::Infallible;

use numkit_core::{Function, Observer};

use super::{Error, Sample, rule};

/// Integrates `f` over `interval` with `n` equal subintervals.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b`, or
/// [`Error::InvalidFunction`] if `n` is zero or odd.
pub fn integrate<F, Obs>(f: &F, interval: [f64; 2], n: usize, mut observer: Obs) -> Result<f64, Error>
where
    F: Function,
    Obs: Observer<Sample, Infallible>,
{
    let (a, b) = rule::bounds(interval)?;
    if n == 0 || n % 2 != 0 {
        return Err(Error::InvalidFunction {
            n,
            requirement: "Simpson's 1/3 rule needs a positive even number of subintervals",
        });
    }

    let weight = |i: usize| {
        if i == 0 || i == n {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        }
    };
    let sum = rule::weighted_sum(f, (a, b), n, weight, &mut observer);

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / n as f64;
    Ok(h / 3.0 * sum)
}

/// Integrates `f` without observation.
///
/// # Errors
///
/// See [`integrate`].
pub fn integrate_unobserved<F: Function>(f: &F, interval: [f64; 2], n: usize) -> Result<f64, Error> {
    integrate(f, interval, n, ())
}
