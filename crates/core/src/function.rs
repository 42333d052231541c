/// A scalar function evaluated by a solver.
///
/// Solvers treat a `Function` as pure and total over the domain they sample.
/// Closures of type `Fn(f64) -> f64` implement this trait automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A [`Function`] that can also evaluate its first derivative.
///
/// Derivative-based solvers such as Newton-Raphson require this capability.
/// Pair two closures with [`WithDerivative`] when no dedicated type exists.
pub trait Differentiable: Function {
    /// Evaluates the first derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

/// Pairs a function with a separately supplied derivative.
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Function,
    D: Function,
{
    /// Creates a differentiable function from `function` and its `derivative`.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F: Function, D: Function> Function for WithDerivative<F, D> {
    fn eval(&self, x: f64) -> f64 {
        self.function.eval(x)
    }
}

impl<F: Function, D: Function> Differentiable for WithDerivative<F, D> {
    fn derivative(&self, x: f64) -> f64 {
        self.derivative.eval(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Cubic with a hand-written derivative.
    struct Cubic;

    impl Function for Cubic {
        fn eval(&self, x: f64) -> f64 {
            x.powi(3) - 2.0 * x
        }
    }

    impl Differentiable for Cubic {
        fn derivative(&self, x: f64) -> f64 {
            3.0 * x * x - 2.0
        }
    }

    fn slope_at(f: &impl Differentiable, x: f64) -> f64 {
        f.derivative(x)
    }

    #[test]
    fn closures_are_functions() {
        let f = |x: f64| x * x;
        assert_relative_eq!(f.eval(3.0), 9.0);
    }

    #[test]
    fn paired_closures_are_differentiable() {
        let f = WithDerivative::new(|x: f64| x.sin(), |x: f64| x.cos());
        assert_relative_eq!(f.eval(0.0), 0.0);
        assert_relative_eq!(slope_at(&f, 0.0), 1.0);
    }

    #[test]
    fn custom_types_are_differentiable() {
        assert_relative_eq!(Cubic.eval(2.0), 4.0);
        assert_relative_eq!(slope_at(&Cubic, 2.0), 10.0);
    }
}
