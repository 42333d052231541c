use thiserror::Error;

/// Configuration shared by the root finders.
///
/// How `tolerance` is applied depends on the method: bisection compares it to
/// the bracket half-width, false position to the full bracket width, fixed
/// point and Newton to the step between iterates, and Brent folds it into a
/// tolerance that also scales with machine epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is non-finite or not positive.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(Config::new(config.max_iters(), config.tolerance()), Ok(config));
    }
}
