use std::fmt;

/// One integrand evaluation made by a fixed quadrature rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position in the rule's node sequence (0-based).
    pub index: usize,

    /// Abscissa at which the integrand was evaluated.
    pub x: f64,

    /// Integrand value at `x`.
    pub fx: f64,

    /// Weight applied to `fx` before the rule's overall scale factor.
    pub weight: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {:>4}: x = {:.12} f(x) = {:.12} weight = {}",
            self.index, self.x, self.fx, self.weight
        )
    }
}
