//! Secant-style root finding on a pair of points.
//!
//! Each iteration interpolates a line through `(a, f(a))` and `(b, f(b))` and
//! takes its zero crossing `c` as the next estimate. The point that shares a
//! sign with `f(c)` on the `a` side is replaced, otherwise `b` is, in the
//! manner of regula falsi. Unlike bisection the endpoints need not bracket a
//! root, so the iteration may also extrapolate outside `[a, b]`.
//!
//! The solver stops once `|f(c)| < residual_tol`.

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace, warn};
use nlsolve_core::{Observer, ScalarFunction};

/// Finds a root of `f` starting from the points `a` and `b`.
///
/// # Errors
///
/// Returns an error if the config is invalid, an endpoint is non-finite,
/// `f` returns a non-finite value, or the two interpolation points have
/// equal function values.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    let [mut a, mut b] = bracket;
    if let Some(&value) = bracket.iter().find(|v| !v.is_finite()) {
        return Err(Error::NonFiniteBracket { value });
    }

    let mut fa = eval(f, a)?;
    let mut fb = eval(f, b)?;
    debug!("secant: f({a}) = {fa}, f({b}) = {fb}");

    let mut last = (a, fa);

    for iter in 1..=config.max_iters() {
        #[allow(clippy::float_cmp)]
        if fa == fb {
            return Err(Error::StagnantIteration {
                iter,
                a,
                b,
                value: fa,
            });
        }

        let x = a - fa * (b - a) / (fb - fa);
        let residual = eval(f, x)?;
        trace!("secant iter {iter}: x = {x}, f(x) = {residual}");

        let event = Event {
            iter,
            bracket: [a, b],
            x,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                bracket: [a, b],
                iters: iter,
            });
        }

        if residual.abs() < config.residual_tol() {
            debug!("secant converged after {iter} iterations: x = {x}");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                bracket: [a, b],
                iters: iter,
            });
        }

        if fa * residual > 0.0 {
            a = x;
            fa = residual;
        } else {
            b = x;
            fb = residual;
        }
        last = (x, residual);
    }

    let (x, residual) = last;
    warn!(
        "secant reached {} iterations with |f(x)| = {}",
        config.max_iters(),
        residual.abs()
    );
    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual,
        bracket: [a, b],
        iters: config.max_iters(),
    })
}

/// Runs the secant solver without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(f, bracket, config, ())
}

fn eval<F: ScalarFunction + ?Sized>(f: &F, x: f64) -> Result<f64, Error> {
    let residual = f.eval(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root_of_two() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::new(100, 1e-10).expect("valid config");

        let solution = solve_unobserved(&f, [0.0, 2.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-10);
        assert!(solution.residual.abs() < 1e-10);
        assert_eq!(solution.iters, 15);
    }

    #[test]
    fn finds_cubic_root() {
        let f = |x: f64| x.powi(3) - x - 2.0;
        let config = Config::new(100, 1e-10).expect("valid config");

        let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 1.521_379_706_8, epsilon = 1e-9);
    }

    #[test]
    fn linear_function_needs_one_step() {
        let f = |x: f64| x - 1.0;

        let solution = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn does_not_require_a_sign_change() {
        let f = |x: f64| x * x - 4.0;
        let config = Config::new(100, 1e-10).expect("valid config");

        let solution = solve_unobserved(&f, [0.0, 1.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn max_iters_returns_last_estimate() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::new(5, 1e-10).expect("valid config");

        let solution = solve_unobserved(&f, [0.0, 2.0], &config).expect("should stop");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5);
        assert_relative_eq!(solution.x, 1.413_793_103_448_275_8, epsilon = 1e-12);
    }

    #[test]
    fn constant_function_is_stagnant() {
        let f = |_: f64| 5.0;

        let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());

        assert!(matches!(
            result,
            Err(Error::StagnantIteration { iter: 1, value, .. }) if value == 5.0
        ));
    }

    #[test]
    fn symmetric_values_are_stagnant() {
        let f = |x: f64| x * x + 1.0;

        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

        assert!(matches!(
            result,
            Err(Error::StagnantIteration { iter: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let f = |x: f64| x;
        assert!(matches!(
            solve_unobserved(&f, [0.0, f64::INFINITY], &Config::default()),
            Err(Error::NonFiniteBracket { .. })
        ));

        let g = |x: f64| x.ln();
        assert!(matches!(
            solve_unobserved(&g, [-1.0, 2.0], &Config::default()),
            Err(Error::NonFiniteResidual { x, .. }) if x == -1.0
        ));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = |x: f64| x * x - 2.0;

        let mut residuals = Vec::new();
        let observer = |event: &Event| {
            residuals.push(event.residual);
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let solution = solve(&f, [0.0, 2.0], &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(residuals.len(), 2);
        assert_relative_eq!(residuals[1], solution.residual);
    }
}
