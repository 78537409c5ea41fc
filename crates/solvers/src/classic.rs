//! Flat entry points returning bare estimates.
//!
//! These wrap the structured solvers with a single tolerance `eps` and
//! discard the termination status: hitting `max_iters` still returns the last
//! estimate. Use the solvers in [`equation`](crate::equation),
//! [`system`](crate::system) and [`linear`](crate::linear) directly when the
//! caller needs to know whether the iteration actually converged.

use nlsolve_core::{Matrix, ScalarFunction, VectorFunction};

use crate::{
    equation::{bisection, secant},
    linear::gauss,
    system::{self, newton, seidel},
};

/// Bisection on `[a, b]`, stopping once the bracket is narrower than `eps`.
///
/// # Errors
///
/// See [`bisection::Error`](crate::equation::bisection::Error).
pub fn bisection<F>(
    max_iters: usize,
    a: f64,
    b: f64,
    eps: f64,
    f: &F,
) -> Result<f64, bisection::Error>
where
    F: ScalarFunction + ?Sized,
{
    let config = bisection::Config::new(max_iters, eps)?;
    bisection::solve_unobserved(f, [a, b], &config).map(|solution| solution.x)
}

/// Secant iteration from `a` and `b`, stopping once `|f(x)| < eps`.
///
/// # Errors
///
/// See [`secant::Error`](crate::equation::secant::Error).
pub fn secant<F>(max_iters: usize, a: f64, b: f64, eps: f64, f: &F) -> Result<f64, secant::Error>
where
    F: ScalarFunction + ?Sized,
{
    let config = secant::Config::new(max_iters, eps)?;
    secant::solve_unobserved(f, [a, b], &config).map(|solution| solution.x)
}

/// Newton-Raphson with a forward-difference Jacobian, stopping once the
/// largest step component is below `eps`.
///
/// # Errors
///
/// See [`system::Error`].
pub fn newton<F>(
    max_iters: usize,
    x0: &[f64],
    eps: f64,
    fs: &[F],
) -> Result<Vec<f64>, system::Error>
where
    F: VectorFunction,
{
    let config = system::Config::new(max_iters, eps, None)?;
    newton::solve_unobserved(fs, x0, &config).map(|solution| solution.x)
}

/// Newton-Raphson with a central-difference Jacobian.
///
/// # Errors
///
/// See [`system::Error`].
pub fn seidel<F>(
    max_iters: usize,
    x0: &[f64],
    eps: f64,
    fs: &[F],
) -> Result<Vec<f64>, system::Error>
where
    F: VectorFunction,
{
    let config = system::Config::new(max_iters, eps, None)?;
    seidel::solve_unobserved(fs, x0, &config).map(|solution| solution.x)
}

/// Neighbor-gap secant iteration for systems.
///
/// # Errors
///
/// See [`system::Error`].
pub fn vector_secant<F>(
    max_iters: usize,
    x0: &[f64],
    eps: f64,
    fs: &[F],
) -> Result<Vec<f64>, system::Error>
where
    F: VectorFunction,
{
    let config = system::Config::new(max_iters, eps, None)?;
    system::secant::solve_unobserved(fs, x0, &config).map(|solution| solution.x)
}

/// Solves `matrix * x = rhs` by Gaussian elimination without pivoting.
///
/// # Errors
///
/// See [`gauss::Error`].
pub fn gaussian_solve(matrix: Matrix, rhs: Vec<f64>) -> Result<Vec<f64>, gauss::Error> {
    gauss::solve(matrix, rhs, &gauss::Config::default())
}
