use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `residual_tol` is not a
    /// finite positive number.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        let config = Self {
            max_iters,
            residual_tol,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the config invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the `|f(x)|` threshold below which the solver stops.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_values() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
        assert_eq!(Config::new(5, 0.0), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(5, f64::INFINITY), Err(ConfigError::ResidualTol));
        assert!(Config::new(1, 1e-3).is_ok());
    }
}
