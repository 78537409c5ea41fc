//! Finite-difference Jacobian estimation.
//!
//! The step is fixed at [`STEP`]. No step adaptation is attempted, so the
//! estimate's precision is limited to roughly `STEP` for forward
//! differences and `STEP²` for central differences, plus rounding error on
//! the order of `ε / STEP`.

use nlsolve_core::{Matrix, VectorFunction};
use thiserror::Error;

/// Perturbation applied to each unknown.
pub const STEP: f64 = 1e-8;

/// Finite-difference scheme used to estimate partial derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Difference {
    /// `(f(x + h e_j) - f(x)) / h`
    Forward,

    /// `(f(x + h e_j) - f(x - h e_j)) / 2h`
    Central,
}

/// The number of equations differs from the number of unknowns.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{equations} equations but {unknowns} unknowns")]
pub struct NotSquare {
    pub equations: usize,
    pub unknowns: usize,
}

/// Estimates the Jacobian `J[i][j] = ∂f_i/∂x_j` at `x`.
///
/// # Errors
///
/// Returns [`NotSquare`] if `fs.len()` differs from `x.len()`.
pub fn estimate<F: VectorFunction>(
    fs: &[F],
    x: &[f64],
    difference: Difference,
) -> Result<Matrix, NotSquare> {
    let n = x.len();
    if fs.len() != n {
        return Err(NotSquare {
            equations: fs.len(),
            unknowns: n,
        });
    }

    let mut jacobian = Matrix::zeros(n);
    let mut shifted = x.to_vec();

    match difference {
        Difference::Forward => {
            let base = residuals(fs, x);
            for j in 0..n {
                shifted[j] = x[j] + STEP;
                for (i, f) in fs.iter().enumerate() {
                    jacobian[(i, j)] = (f.eval(&shifted) - base[i]) / STEP;
                }
                shifted[j] = x[j];
            }
        }
        Difference::Central => {
            for j in 0..n {
                shifted[j] = x[j] + STEP;
                let ahead = residuals(fs, &shifted);
                shifted[j] = x[j] - STEP;
                for (i, f) in fs.iter().enumerate() {
                    jacobian[(i, j)] = (ahead[i] - f.eval(&shifted)) / (2.0 * STEP);
                }
                shifted[j] = x[j];
            }
        }
    }

    Ok(jacobian)
}

/// Evaluates every equation of the system at `x`.
#[must_use]
pub fn residuals<F: VectorFunction>(fs: &[F], x: &[f64]) -> Vec<f64> {
    fs.iter().map(|f| f.eval(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    #[test]
    fn derivative_of_square() {
        let fs = [|x: &[f64]| x[0] * x[0]];

        let forward = estimate(&fs, &[2.0], Difference::Forward).expect("square")[(0, 0)];
        let central = estimate(&fs, &[2.0], Difference::Central).expect("square")[(0, 0)];

        assert_relative_eq!(forward, 4.0, max_relative = 1e-6);
        assert_relative_eq!(central, 4.0, max_relative = 1e-6);
        assert!((central - 4.0).abs() <= (forward - 4.0).abs());
    }

    #[test]
    fn central_is_exact_at_a_stationary_point() {
        let fs = [|x: &[f64]| x[0] * x[0]];

        let forward = estimate(&fs, &[0.0], Difference::Forward).expect("square")[(0, 0)];
        let central = estimate(&fs, &[0.0], Difference::Central).expect("square")[(0, 0)];

        assert!(forward > 0.0);
        assert_relative_eq!(forward, STEP);
        assert_eq!(central, 0.0);
    }

    #[test]
    fn two_by_two_entries() {
        let fs: Vec<Box<dyn Fn(&[f64]) -> f64>> = vec![
            Box::new(|x: &[f64]| x[0] * x[1]),
            Box::new(|x: &[f64]| x[0] + 3.0 * x[1] * x[1]),
        ];

        for difference in [Difference::Forward, Difference::Central] {
            let j = estimate(&fs, &[2.0, 1.0], difference).expect("square");
            assert_relative_eq!(j[(0, 0)], 1.0, epsilon = 1e-6);
            assert_relative_eq!(j[(0, 1)], 2.0, epsilon = 1e-6);
            assert_relative_eq!(j[(1, 0)], 1.0, epsilon = 1e-6);
            assert_relative_eq!(j[(1, 1)], 6.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn forward_reuses_the_base_residual() {
        let calls = Cell::new(0);
        let f = |x: &[f64]| {
            calls.set(calls.get() + 1);
            x[0] + x[1]
        };
        let fs = [f, f];

        let _ = estimate(&fs, &[1.0, 1.0], Difference::Forward);
        assert_eq!(calls.get(), 6);

        calls.set(0);
        let _ = estimate(&fs, &[1.0, 1.0], Difference::Central);
        assert_eq!(calls.get(), 8);
    }

    #[test]
    fn rejects_a_non_square_system() {
        let fs = [|x: &[f64]| x[0] + x[1]];

        assert_eq!(
            estimate(&fs, &[1.0, 2.0], Difference::Central),
            Err(NotSquare {
                equations: 1,
                unknowns: 2
            })
        );
    }

    #[test]
    fn residuals_evaluates_each_equation() {
        let fs: Vec<Box<dyn Fn(&[f64]) -> f64>> =
            vec![Box::new(|x: &[f64]| x[0] - 1.0), Box::new(|x: &[f64]| x[0] * x[1])];

        assert_eq!(residuals(&fs, &[3.0, 2.0]), vec![2.0, 6.0]);
    }
}
