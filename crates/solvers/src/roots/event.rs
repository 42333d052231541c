use std::fmt;

/// Event emitted by the root finders once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The point evaluated this iteration.
    pub x: f64,

    /// The residual at `x`.
    ///
    /// This is `f(x)` for every method except fixed point, where it is the
    /// step `g(x) - x`.
    pub residual: f64,

    /// The current bracket, for bracketing methods.
    pub bracket: Option<[f64; 2]>,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iter {:>4}: x = {:.12} residual = {:.3e}",
            self.iter, self.x, self.residual
        )?;
        if let Some([left, right]) = self.bracket {
            write!(f, " bracket = [{left:.12}, {right:.12}]")?;
        }
        Ok(())
    }
}
