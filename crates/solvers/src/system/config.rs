use thiserror::Error;

/// Configuration shared by the system solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    step_tol: f64,
    residual_tol: Option<f64>,
}

/// Errors that can occur when validating a system solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("step_tol must be finite and positive")]
    StepTol,

    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            step_tol: 1e-10,
            residual_tol: None,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The solver stops once `max_i |delta_i| < step_tol`. If `residual_tol`
    /// is set, that stop only counts as convergence when every residual is
    /// within it; otherwise the solve is reported as stalled.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or a tolerance is not a
    /// finite positive number.
    pub fn new(
        max_iters: usize,
        step_tol: f64,
        residual_tol: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_iters,
            step_tol,
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
        if !is_positive(self.step_tol) {
            return Err(ConfigError::StepTol);
        }
        if self.residual_tol.is_some_and(|tol| !is_positive(tol)) {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step norm below which the iteration stops.
    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }

    /// Returns the residual bound required for convergence, if any.
    #[must_use]
    pub fn residual_tol(&self) -> Option<f64> {
        self.residual_tol
    }
}

fn is_positive(tol: f64) -> bool {
    tol.is_finite() && tol > 0.0
}
