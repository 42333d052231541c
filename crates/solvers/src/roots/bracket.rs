use numkit_core::Function;

use super::Error;

/// An interval whose endpoint residuals differ in sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Evaluates `f` at both endpoints and validates the sign change.
    ///
    /// Endpoints may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRootInInterval`] unless `f(a)·f(b) < 0`.
    pub fn new(f: &impl Function, [a, b]: [f64; 2]) -> Result<Self, Error> {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let f_left = f.eval(left);
        let f_right = f.eval(right);

        if f_left * f_right < 0.0 {
            Ok(Self {
                left,
                right,
                f_left,
                f_right,
            })
        } else {
            Err(Error::NoRootInInterval {
                a: left,
                b: right,
                fa: f_left,
                fb: f_right,
            })
        }
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the residuals at the left and right bounds.
    #[must_use]
    pub fn residuals(&self) -> [f64; 2] {
        [self.f_left, self.f_right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the x-intercept of the secant line through both endpoints.
    #[must_use]
    pub fn secant_intercept(&self) -> f64 {
        (self.left * self.f_right - self.right * self.f_left) / (self.f_right - self.f_left)
    }

    /// Shrinks the bracket to the sub-interval that keeps the sign change.
    pub(super) fn shrink(&mut self, x: f64, fx: f64) {
        if self.f_left * fx < 0.0 {
            self.right = x;
            self.f_right = fx;
        } else {
            self.left = x;
            self.f_left = fx;
        }
    }
}
