use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during secant solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite bracket endpoint {value}")]
    NonFiniteBracket { value: f64 },

    /// Both interpolation points have the same function value, so the
    /// secant line is horizontal.
    #[error("stagnant iteration {iter}: f({a}) == f({b}) == {value}")]
    StagnantIteration { iter: usize, a: f64, b: f64, value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}
