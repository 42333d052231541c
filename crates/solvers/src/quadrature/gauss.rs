//! Gauss-Legendre quadrature.
//!
//! An `n`-node rule integrates polynomials up to degree `2n - 1` exactly.
//! Nodes and weights are tabulated on `[-1, 1]` and mapped affinely onto
//! `[a, b]`:
//!
//! ```text
//! ∫ f ≈ (b - a)/2 · Σ wᵢ·f((a + b)/2 + (b - a)/2 · tᵢ)
//! ```
//!
//! There is no iteration and no subdivision count, so the only failure is
//! an invalid interval.

use std::convert::Infallible;

use numkit_core::{Function, Observer};

use super::{Error, Sample, rule};

/// Number of nodes in a Gauss-Legendre rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Nodes `±1/√3`, unit weights. Exact to degree 3.
    #[default]
    Two,
    /// Exact to degree 5.
    Three,
    /// Exact to degree 7.
    Four,
    /// Exact to degree 9.
    Five,
}

impl Order {
    /// Returns `(node, weight)` pairs on `[-1, 1]`.
    #[must_use]
    pub fn nodes(self) -> &'static [(f64, f64)] {
        match self {
            Self::Two => &[
                (-0.577_350_269_189_625_8, 1.0),
                (0.577_350_269_189_625_8, 1.0),
            ],
            Self::Three => &[
                (-0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
                (0.0, 0.888_888_888_888_888_9),
                (0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
            ],
            Self::Four => &[
                (-0.861_136_311_594_052_6, 0.347_854_845_137_453_8),
                (-0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
                (0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
                (0.861_136_311_594_052_6, 0.347_854_845_137_453_8),
            ],
            Self::Five => &[
                (-0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
                (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
                (0.0, 0.568_888_888_888_888_9),
                (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
                (0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
            ],
        }
    }
}

/// Integrates `f` over `interval` with a Gauss-Legendre rule of `order`.
///
/// Samples report the tabulated weight; the half-width scale is applied to
/// the weighted sum.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b`.
pub fn integrate<F, Obs>(
    f: &F,
    interval: [f64; 2],
    order: Order,
    mut observer: Obs,
) -> Result<f64, Error>
where
    F: Function,
    Obs: Observer<Sample, Infallible>,
{
    let (a, b) = rule::bounds(interval)?;
    let mid = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let sum: f64 = order
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, &(node, weight))| {
            let x = mid + half * node;
            let sample = Sample {
                index,
                x,
                fx: f.eval(x),
                weight,
            };
            if let Some(never) = observer.observe(&sample) {
                match never {}
            }
            weight * sample.fx
        })
        .sum();

    Ok(half * sum)
}

/// Integrates `f` without observation.
///
/// # Errors
///
/// See [`integrate`].
pub fn integrate_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    order: Order,
) -> Result<f64, Error> {
    integrate(f, interval, order, ())
}

/// Integrates `f` with the two-point rule, nodes `±1/√3`.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b`.
pub fn two_point<F: Function>(f: &F, interval: [f64; 2]) -> Result<f64, Error> {
    integrate(f, interval, Order::Two, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const ORDERS: [Order; 4] = [Order::Two, Order::Three, Order::Four, Order::Five];

    #[test]
    fn weights_sum_to_interval_length() {
        for order in ORDERS {
            let total: f64 = order.nodes().iter().map(|(_, w)| w).sum();
            assert_relative_eq!(total, 2.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn nodes_are_symmetric() {
        for order in ORDERS {
            let nodes = order.nodes();
            for (left, right) in nodes.iter().zip(nodes.iter().rev()) {
                assert_relative_eq!(left.0, -right.0);
                assert_relative_eq!(left.1, right.1);
            }
        }
    }

    #[test]
    fn two_point_is_exact_for_quadratic_and_cubic() {
        let square = two_point(&|x: f64| x * x, [0.0, 1.0]).expect("valid");
        assert_relative_eq!(square, 1.0 / 3.0, max_relative = 1e-15);

        let cubic = two_point(&|x: f64| x.powi(3) + 2.0 * x, [1.0, 3.0]).expect("valid");
        assert_relative_eq!(cubic, 28.0, max_relative = 1e-14);
    }

    #[test]
    fn each_order_reaches_its_degree() {
        let cases: [(Order, i32, [f64; 2], f64); 3] = [
            (Order::Three, 5, [0.0, 1.0], 1.0 / 6.0),
            (Order::Four, 7, [0.0, 1.0], 1.0 / 8.0),
            (Order::Five, 9, [0.0, 2.0], 102.4),
        ];
        for (order, degree, interval, exact) in cases {
            let value =
                integrate_unobserved(&|x: f64| x.powi(degree), interval, order).expect("valid");
            assert_relative_eq!(value, exact, max_relative = 1e-13);
        }
    }

    #[test]
    fn two_point_is_not_exact_for_quartic() {
        let value = two_point(&|x: f64| x.powi(4), [-1.0, 1.0]).expect("valid");
        assert_relative_eq!(value, 2.0 / 9.0, epsilon = 1e-15);
        assert!((value - 0.4).abs() > 0.1);
    }

    #[test]
    fn observer_sees_mapped_nodes() {
        let mut nodes = Vec::new();
        let observer = |sample: &Sample| -> Option<Infallible> {
            nodes.push(sample.x);
            None
        };

        integrate(&|x: f64| x, [2.0, 4.0], Order::Three, observer).expect("valid");

        assert_eq!(nodes.len(), 3);
        assert_relative_eq!(nodes[1], 3.0);
        assert_relative_eq!(nodes[2], 3.0 + 0.774_596_669_241_483_4);
    }

    #[test]
    fn rejects_invalid_interval() {
        assert_eq!(
            two_point(&|x: f64| x, [0.0, 0.0]),
            Err(Error::InvalidInterval { a: 0.0, b: 0.0 })
        );
    }
}
