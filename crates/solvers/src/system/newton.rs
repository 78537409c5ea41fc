//! Newton-Raphson for systems, with a forward-difference Jacobian.
//!
//! Each iteration estimates the Jacobian `J` at the current iterate using
//! [`Difference::Forward`], solves `J delta = -f(x)` by Gaussian elimination
//! and takes the full step `x += delta`. No line search or damping is
//! applied, so convergence depends on starting close enough to a root.
//!
//! A singular Jacobian surfaces as [`Error::Linear`].
//!
//! [`Difference::Forward`]: crate::jacobian::Difference::Forward

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
    linearized::solve(fs, x0, config, Difference::Forward, observer)
}

/// Runs Newton-Raphson without observation.
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
