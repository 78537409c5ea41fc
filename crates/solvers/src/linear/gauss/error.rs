use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during Gaussian elimination.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("empty system")]
    Empty,

    #[error("matrix has {rows} rows but right-hand side has {rhs} entries")]
    DimensionMismatch { rows: usize, rhs: usize },

    #[error("non-finite entry in matrix or right-hand side")]
    NonFinite,

    /// A pivot was zero, negligible, or non-finite during elimination.
    ///
    /// No rows are exchanged, so a non-singular matrix with a zero leading
    /// entry also ends up here.
    #[error("singular matrix: pivot {pivot} is {value}")]
    SingularMatrix { pivot: usize, value: f64 },
}
