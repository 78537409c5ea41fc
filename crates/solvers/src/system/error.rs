use thiserror::Error;

use crate::{jacobian::NotSquare, linear::gauss};

use super::config::ConfigError;

/// Errors that can occur while solving a system of equations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("system has no equations")]
    EmptySystem,

    #[error("{equations} equations but {unknowns} unknowns")]
    DimensionMismatch { equations: usize, unknowns: usize },

    #[error("non-finite starting value {value} at index {index}")]
    NonFiniteStart { index: usize, value: f64 },

    #[error("equation {index} returned non-finite value {value}")]
    NonFiniteResidual { index: usize, value: f64 },

    /// An equation took the same value at the current and previous iterate,
    /// leaving the secant update undefined.
    #[error("stagnant iteration {iter}: equation {index} did not change")]
    StagnantIteration { iter: usize, index: usize },

    /// The linearized step could not be solved.
    #[error("linear solve failed: {0}")]
    Linear(#[from] gauss::Error),
}

impl From<NotSquare> for Error {
    fn from(error: NotSquare) -> Self {
        Self::DimensionMismatch {
            equations: error.equations,
            unknowns: error.unknowns,
        }
    }
}
