//! Solvers for systems of `n` nonlinear equations in `n` unknowns.
//!
//! A system is a slice of [`VectorFunction`]s, one per equation, each
//! mapping the full vector of unknowns to a residual. Solvers drive every
//! residual toward zero from a starting point `x0`.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson with a forward-difference Jacobian
//! - [`seidel`] — Newton-Raphson with a central-difference Jacobian
//! - [`secant`] — derivative-free secant update using neighboring components
//!
//! All three share [`Config`], [`Event`], [`Action`], [`Solution`] and
//! [`Error`]. They stop when the step norm `max_i |delta_i|` falls below
//! `step_tol`. A small step does not imply small residuals, so the final
//! residuals are always evaluated and returned, and `residual_tol` can turn
//! a small step with large residuals into [`Status::Stalled`].
//!
//! [`VectorFunction`]: nlsolve_core::VectorFunction

mod action;
mod config;
mod error;
mod event;
mod linearized;
mod solution;

pub mod newton;
pub mod secant;
pub mod seidel;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, warn};
use nlsolve_core::VectorFunction;

use crate::jacobian;

/// Checks the config and that the system is square with a finite start.
fn validate<F>(fs: &[F], x0: &[f64], config: &Config) -> Result<(), Error> {
    config.validate()?;

    if fs.is_empty() {
        return Err(Error::EmptySystem);
    }
    if fs.len() != x0.len() {
        return Err(Error::DimensionMismatch {
            equations: fs.len(),
            unknowns: x0.len(),
        });
    }
    if let Some((index, &value)) = x0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteStart { index, value });
    }

    Ok(())
}

/// Evaluates the residual vector, rejecting non-finite values.
fn residuals<F: VectorFunction>(fs: &[F], x: &[f64]) -> Result<Vec<f64>, Error> {
    let values = jacobian::residuals(fs, x);
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteResidual {
            index,
            value: values[index],
        }),
        None => Ok(values),
    }
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

/// Builds the solution for a solve that met the step criterion.
fn converged<F: VectorFunction>(
    fs: &[F],
    x: Vec<f64>,
    step_norm: f64,
    iters: usize,
    config: &Config,
) -> Result<Solution, Error> {
    let residuals = residuals(fs, &x)?;
    let solution = Solution {
        status: Status::Converged,
        x,
        residuals,
        step_norm,
        iters,
    };

    match config.residual_tol() {
        Some(tol) if solution.residual_norm() > tol => {
            warn!(
                "step converged after {iters} iterations but max |f(x)| = {} exceeds {tol}",
                solution.residual_norm()
            );
            Ok(Solution {
                status: Status::Stalled,
                ..solution
            })
        }
        _ => {
            debug!("converged after {iters} iterations: x = {:?}", solution.x);
            Ok(solution)
        }
    }
}

/// Builds the solution for a solve cut short by the cap or an observer.
///
/// The residuals are recorded as evaluated, non-finite values included, so
/// the last iterate is never lost.
fn finish<F: VectorFunction>(
    fs: &[F],
    x: Vec<f64>,
    step_norm: f64,
    iters: usize,
    status: Status,
) -> Solution {
    let residuals = jacobian::residuals(fs, &x);
    Solution {
        status,
        x,
        residuals,
        step_norm,
        iters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_checks_shape_and_start() {
        let fs: [fn(&[f64]) -> f64; 2] = [|x| x[0], |x| x[1]];
        let none: [fn(&[f64]) -> f64; 0] = [];
        let config = Config::default();

        assert_eq!(validate(&fs, &[0.0, 0.0], &config), Ok(()));
        assert_eq!(validate(&none, &[], &config), Err(Error::EmptySystem));
        assert_eq!(
            validate(&fs, &[0.0], &config),
            Err(Error::DimensionMismatch {
                equations: 2,
                unknowns: 1
            })
        );
        assert!(matches!(
            validate(&fs, &[0.0, f64::NAN], &config),
            Err(Error::NonFiniteStart { index: 1, .. })
        ));
    }

    #[test]
    fn residuals_reject_non_finite_values() {
        let fs: Vec<Box<dyn Fn(&[f64]) -> f64>> =
            vec![Box::new(|x: &[f64]| x[0]), Box::new(|x: &[f64]| x[0].ln())];

        assert!(residuals(&fs, &[1.0]).is_ok());
        assert!(matches!(
            residuals(&fs, &[-1.0]),
            Err(Error::NonFiniteResidual { index: 1, .. })
        ));
    }

    #[test]
    fn residual_check_marks_stalled() {
        let fs = [|x: &[f64]| x[0] - 1.0];
        let strict = Config::new(10, 1e-10, Some(1e-6)).expect("valid config");

        let ok = converged(&fs, vec![1.0], 0.0, 3, &strict).expect("finite residuals");
        assert_eq!(ok.status, Status::Converged);

        let stalled = converged(&fs, vec![2.0], 0.0, 3, &strict).expect("finite residuals");
        assert_eq!(stalled.status, Status::Stalled);
        assert_eq!(stalled.residuals, vec![1.0]);

        let lenient = converged(&fs, vec![2.0], 0.0, 3, &Config::default()).expect("finite");
        assert_eq!(lenient.status, Status::Converged);
    }

    #[test]
    fn non_square_jacobian_is_a_dimension_mismatch() {
        let error: Error = jacobian::NotSquare {
            equations: 1,
            unknowns: 2,
        }
        .into();

        assert_eq!(
            error,
            Error::DimensionMismatch {
                equations: 1,
                unknowns: 2
            }
        );
    }

    #[test]
    fn finish_keeps_non_finite_residuals() {
        let fs = [|x: &[f64]| x[0].ln()];

        let solution = finish(&fs, vec![-0.5], 0.25, 1, Status::MaxIters);

        assert_eq!(solution.x, vec![-0.5]);
        assert!(solution.residuals[0].is_nan());
        assert!(matches!(
            converged(&fs, vec![-0.5], 0.0, 1, &Config::default()),
            Err(Error::NonFiniteResidual { index: 0, .. })
        ));
    }
}
