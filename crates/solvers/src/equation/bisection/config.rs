use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("x_tol must be finite and positive")]
    XTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The solver stops once the bracket is narrower than `x_tol`, or after
    /// `max_iters` halvings.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `x_tol` is not a finite
    /// positive number.
    pub fn new(max_iters: usize, x_tol: f64) -> Result<Self, ConfigError> {
        let config = Self { max_iters, x_tol };
        config.validate()?;
        Ok(config)
    }

    /// Checks the config invariants.
    ///
    /// Configs built with [`Config::new`] always pass; this guards configs
    /// that were deserialized.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.x_tol.is_finite() || self.x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }
        Ok(())
    }

    /// Returns the maximum number of bracket halvings.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket width below which the solver stops.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }
}
