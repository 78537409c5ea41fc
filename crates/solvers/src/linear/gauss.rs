//! Gaussian elimination without pivoting.
//!
//! Forward elimination reduces `A` to upper-triangular form, applying the
//! same row operations to `b`, and back substitution recovers `x`.
//!
//! Rows are never exchanged. Any pivot whose magnitude is at most
//! `pivot_rtol * max|a_ij|` stops the solve with [`Error::SingularMatrix`],
//! even when a row swap would have worked. Diagonally dominant and symmetric
//! positive definite matrices, which is what Newton-type Jacobians near a
//! simple root usually look like, never need one.

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use log::trace;
use nlsolve_core::Matrix;

/// Solves `matrix * x = rhs`.
///
/// Both inputs are consumed as working storage; clone them first if the
/// originals are still needed.
///
/// # Errors
///
/// Returns an error if the system is empty, the dimensions disagree, any
/// input is non-finite, or a pivot is negligible.
pub fn solve(mut matrix: Matrix, mut rhs: Vec<f64>, config: &Config) -> Result<Vec<f64>, Error> {
    config.validate()?;

    let n = matrix.dim();
    if n == 0 {
        return Err(Error::Empty);
    }
    if rhs.len() != n {
        return Err(Error::DimensionMismatch {
            rows: n,
            rhs: rhs.len(),
        });
    }
    if !matrix.is_finite() || rhs.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFinite);
    }

    let threshold = config.pivot_rtol() * matrix.max_abs();

    for k in 0..n {
        let pivot = matrix[(k, k)];
        if !pivot.is_finite() || pivot.abs() <= threshold {
            return Err(Error::SingularMatrix {
                pivot: k,
                value: pivot,
            });
        }

        for i in (k + 1)..n {
            let factor = matrix[(i, k)] / pivot;
            #[allow(clippy::float_cmp)]
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                let delta = factor * matrix[(k, j)];
                matrix[(i, j)] -= delta;
            }
            let delta = factor * rhs[k];
            rhs[i] -= delta;
        }
    }

    // Back substitution in place: `rhs` becomes the solution.
    for i in (0..n).rev() {
        let row = matrix.row(i);
        let tail: f64 = row[i + 1..]
            .iter()
            .zip(&rhs[i + 1..])
            .map(|(a, x)| a * x)
            .sum();
        rhs[i] = (rhs[i] - tail) / row[i];
    }

    trace!("gauss: solved {n}x{n} system");
    Ok(rhs)
}
