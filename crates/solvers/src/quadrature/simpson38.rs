//! Composite Simpson 3/8 rule.
//!
//! ```text
//! ∫ f ≈ 3h/8·(f(x₀) + 3f(x₁) + 3f(x₂) + 2f(x₃) + 3f(x₄) + … + 3f(xₙ₋₁) + f(xₙ))
//! ```
//!
//! Requires the number of subintervals to be a multiple of three. Interior
//! nodes at every third index join two cubic panels and get weight 2.

use std::convert::Infallible;

use numkit_core::{Function, Observer};

use super::{Error, Sample, rule};

/// Integrates `f` over `interval` with `n` equal subintervals.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b`, or
/// [`Error::InvalidFunction`] if `n` is zero or not a multiple of 3.
pub fn integrate<F, Obs>(f: &F, interval: [f64; 2], n: usize, mut observer: Obs) -> Result<f64, Error>
where
    F: Function,
    Obs: Observer<Sample, Infallible>,
{
    let (a, b) = rule::bounds(interval)?;
    if n == 0 || n % 3 != 0 {
        return Err(Error::InvalidFunction {
            n,
            requirement: "Simpson's 3/8 rule needs a positive multiple of three subintervals",
        });
    }

    let weight = |i: usize| {
        if i == 0 || i == n {
            1.0
        } else if i % 3 == 0 {
            2.0
        } else {
            3.0
        }
    };
    let sum = rule::weighted_sum(f, (a, b), n, weight, &mut observer);

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / n as f64;
    Ok(3.0 * h / 8.0 * sum)
}

/// Integrates `f` without observation.
///
/// # Errors
///
/// See [`integrate`].
pub fn integrate_unobserved<F: Function>(f: &F, interval: [f64; 2], n: usize) -> Result<f64, Error> {
    integrate(f, interval, n, ())
}
