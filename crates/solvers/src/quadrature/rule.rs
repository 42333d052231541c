use std::convert::Infallible;

use numkit_core::{Function, Observer};

use super::{Error, Sample};

/// Validates an integration interval and returns its ordered bounds.
pub(super) fn bounds([a, b]: [f64; 2]) -> Result<(f64, f64), Error> {
    if a.is_finite() && b.is_finite() && a < b {
        Ok((a, b))
    } else {
        Err(Error::InvalidInterval { a, b })
    }
}

/// Evaluates `Σ weight(i)·f(a + i·h)` over the `n + 1` grid points of `[a, b]`.
///
/// The last node is placed exactly at `b` so that rounding in `n·h` never
/// shifts the upper endpoint.
pub(super) fn weighted_sum<F, Obs>(
    f: &F,
    (a, b): (f64, f64),
    n: usize,
    weight: impl Fn(usize) -> f64,
    observer: &mut Obs,
) -> f64
where
    F: Function,
    Obs: Observer<Sample, Infallible>,
{
    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / n as f64;

    (0..=n)
        .map(|index| {
            #[allow(clippy::cast_precision_loss)]
            let x = if index == n { b } else { a + index as f64 * h };
            let sample = Sample {
                index,
                x,
                fx: f.eval(x),
                weight: weight(index),
            };
            if let Some(never) = observer.observe(&sample) {
                match never {}
            }
            sample.weight * sample.fx
        })
        .sum()
}
