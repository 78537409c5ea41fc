//! Newton-Raphson for systems, with a central-difference Jacobian.
//!
//! Despite the name this is not Gauss-Seidel relaxation: the iteration is
//! the same full-step Newton update as [`newton`](super::newton), but the
//! Jacobian is estimated with [`Difference::Central`]. Central differences
//! cost twice the function evaluations per column and have a smaller
//! truncation error, which matters mostly for badly scaled systems.
//!
//! [`Difference::Central`]: crate::jacobian::Difference::Central

use nlsolve_core::{Observer, VectorFunction};

use crate::jacobian::Difference;

use super::{Action, Config, Error, Event, Solution, linearized};

/// Solves the system `fs` starting from `x0`.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, an equation returns a
/// non-finite value, or the linearized step cannot be solved.
pub fn solve<F, Obs>(
    fs: &[F],
    x0: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    linearized::solve(fs, x0, config, Difference::Central, observer)
}

/// Runs the central-difference iteration without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(fs: &[F], x0: &[f64], config: &Config) -> Result<Solution, Error>
where
    F: VectorFunction,
{
    solve(fs, x0, config, ())
}
