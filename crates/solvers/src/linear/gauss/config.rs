use thiserror::Error;

/// Configuration for Gaussian elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pivot_rtol: f64,
}

/// Errors that can occur when validating a Gaussian elimination config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pivot_rtol must be finite and non-negative")]
    PivotRtol,
}

impl Default for Config {
    fn default() -> Self {
        Self { pivot_rtol: 1e-13 }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A pivot is treated as zero when its magnitude is at most
    /// `pivot_rtol` times the largest magnitude entry of the input matrix.
    /// With `pivot_rtol = 0.0` only exact zeros are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if `pivot_rtol` is negative or non-finite.
    pub fn new(pivot_rtol: f64) -> Result<Self, ConfigError> {
        let config = Self { pivot_rtol };
        config.validate()?;
        Ok(config)
    }

    /// Checks the config invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PivotRtol`] for a negative or non-finite tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pivot_rtol.is_finite() && self.pivot_rtol >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::PivotRtol)
        }
    }

    #[must_use]
    pub fn pivot_rtol(&self) -> f64 {
        self.pivot_rtol
    }
}
