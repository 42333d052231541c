use thiserror::Error;

/// Configuration for Romberg integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_rows: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a Romberg config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_rows must be between 2 and {limit}, got {0}", limit = Config::ROW_LIMIT)]
    MaxRows(usize),

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rows: 20,
            tolerance: 1e-10,
        }
    }
}

impl Config {
    /// Largest accepted row budget.
    ///
    /// Row `i` uses `2^i` panels, so this caps a single solve at about a
    /// billion integrand evaluations.
    pub const ROW_LIMIT: usize = 30;

    /// Creates a new config with a validated row budget and tolerance.
    ///
    /// `max_rows` counts every row of the table, including the single-panel
    /// row 0. At least two rows are needed to compare diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_rows` is outside `2..=ROW_LIMIT`, or if
    /// `tolerance` is non-finite or not positive.
    pub fn new(max_rows: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !(2..=Self::ROW_LIMIT).contains(&max_rows) {
            return Err(ConfigError::MaxRows(max_rows));
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_rows,
            tolerance,
        })
    }

    /// Returns the maximum number of table rows.
    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Returns the convergence tolerance on successive diagonal entries.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
