//! Composite trapezoidal rule.
//!
//! ```text
//! ∫ f ≈ h·(f(a)/2 + f(a+h) + … + f(b-h) + f(b)/2),   h = (b - a) / n
//! ```
//!
//! Exact for linear integrands; the error shrinks as `O(h²)`.

use std::convert::Infallible;

use numkit_core::{Function, Observer};

use super::{Error, Sample, rule};

/// Integrates `f` over `interval` with `n` equal subintervals.
///
/// The observer sees every sample, endpoints weighted `1/2`.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b`, or
/// [`Error::InvalidFunction`] if `n` is zero.
pub fn integrate<F, Obs>(f: &F, interval: [f64; 2], n: usize, mut observer: Obs) -> Result<f64, Error>
where
    F: Function,
    Obs: Observer<Sample, Infallible>,
{
    let (a, b) = rule::bounds(interval)?;
    if n == 0 {
        return Err(Error::InvalidFunction {
            n,
            requirement: "the trapezoidal rule needs at least one subinterval",
        });
    }

    let weight = |i: usize| if i == 0 || i == n { 0.5 } else { 1.0 };
    let sum = rule::weighted_sum(f, (a, b), n, weight, &mut observer);

    #[allow(clippy::cast_precision_loss)]
    Ok((b - a) / n as f64 * sum)
}

/// Integrates `f` without observation.
///
/// # Errors
///
/// See [`integrate`].
pub fn integrate_unobserved<F: Function>(f: &F, interval: [f64; 2], n: usize) -> Result<f64, Error> {
    integrate(f, interval, n, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_for_linear_integrand() {
        let value = integrate_unobserved(&|x: f64| 3.0 * x + 1.0, [0.0, 2.0], 1).expect("valid");
        assert_relative_eq!(value, 8.0);
    }

    #[test]
    fn quadratic_error_matches_leading_term() {
        // Error of the composite rule on x² is (b - a)·h²/6.
        let value = integrate_unobserved(&|x: f64| x * x, [0.0, 1.0], 4).expect("valid");
        assert_relative_eq!(value, 0.34375, epsilon = 1e-15);
        assert_relative_eq!(value - 1.0 / 3.0, 0.0625 / 6.0, epsilon = 1e-15);
    }

    #[test]
    fn more_panels_reduce_error() {
        let f = |x: f64| x.sin();
        let exact = 2.0;
        let pi = std::f64::consts::PI;

        let coarse = integrate_unobserved(&f, [0.0, pi], 8).expect("valid");
        let fine = integrate_unobserved(&f, [0.0, pi], 16).expect("valid");

        assert!((fine - exact).abs() < (coarse - exact).abs() / 3.5);
    }

    #[test]
    fn observer_sees_halved_endpoints() {
        let mut weights = Vec::new();
        let observer = |sample: &Sample| -> Option<Infallible> {
            weights.push(sample.weight);
            None
        };

        integrate(&|x: f64| x, [0.0, 1.0], 3, observer).expect("valid");

        assert_eq!(weights, vec![0.5, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn rejects_zero_subintervals() {
        let result = integrate_unobserved(&|x: f64| x, [0.0, 1.0], 0);
        assert!(matches!(result, Err(Error::InvalidFunction { n: 0, .. })));
    }

    #[test]
    fn rejects_empty_interval() {
        let result = integrate_unobserved(&|x: f64| x, [1.0, 1.0], 4);
        assert_eq!(result, Err(Error::InvalidInterval { a: 1.0, b: 1.0 }));
    }
}
