use thiserror::Error;

/// Configuration for the simplex solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    feasibility_tol: f64,
}

/// Errors that can occur when validating a simplex config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("feasibility tolerance must be finite and non-negative")]
    FeasibilityTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            feasibility_tol: 1e-9,
        }
    }
}

impl Config {
    /// Creates a new config with a validated feasibility tolerance.
    ///
    /// `max_iters` bounds the total number of pivots across both phases.
    ///
    /// `feasibility_tol` is the magnitude at or below which tableau entries
    /// count as zero: reduced costs must fall below `-feasibility_tol` to
    /// enter, pivot candidates must exceed it, and a phase-one optimum within
    /// it of zero counts as feasible. Zero gives the exact textbook tests.
    ///
    /// # Errors
    ///
    /// Returns an error if `feasibility_tol` is negative or non-finite.
    pub fn new(max_iters: usize, feasibility_tol: f64) -> Result<Self, ConfigError> {
        if !feasibility_tol.is_finite() || feasibility_tol < 0.0 {
            return Err(ConfigError::FeasibilityTol);
        }

        Ok(Self {
            max_iters,
            feasibility_tol,
        })
    }

    /// Returns the pivot budget.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the zero threshold for tableau entries.
    #[must_use]
    pub fn feasibility_tol(&self) -> f64 {
        self.feasibility_tol
    }
}
