//! Bisection method for scalar root finding.
//!
//! # Algorithm
//!
//! Given a bracket `[a, b]` where `f(a)` and `f(b)` have opposite signs, the
//! solver repeatedly evaluates the midpoint `c = (a + b) / 2` and keeps the
//! half that still contains a sign change. The bracket halves every iteration,
//! so convergence is guaranteed for continuous functions.
//!
//! The solver stops when the bracket is narrower than the configured `x_tol`,
//! when no float lies strictly inside it (so an absolute `x_tol` below the
//! float spacing near a large root still converges), when a midpoint is an
//! exact root, or after `max_iters` halvings. The
//! reported `x` is the last midpoint; convergence of the bracket says nothing
//! about `|f(x)|`, which is returned alongside so callers can check it.
//!
//! Endpoints that are already exact roots are returned without iterating.
//! A function with a pole inside the bracket also changes sign; the solver
//! reports [`Error::NonFiniteResidual`] if it lands on the pole exactly.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace, warn};
use nlsolve_core::{Observer, ScalarFunction};

use bracket::Bracket;

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// The observer sees every midpoint evaluation and may stop the solver.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is non-finite,
/// has zero width, or shows no sign change, or if `f` returns a non-finite
/// value.
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

    let [left, right] = bracket::ordered(bracket)?;

    let left_value = eval(f, left)?;
    let right_value = eval(f, right)?;
    debug!("bisection: f({left}) = {left_value}, f({right}) = {right_value}");

    #[allow(clippy::float_cmp)]
    if left_value == 0.0 {
        return Ok(exact_root(left, [left, right], 0));
    }
    #[allow(clippy::float_cmp)]
    if right_value == 0.0 {
        return Ok(exact_root(right, [left, right], 0));
    }

    let mut bracket = Bracket::new([left, right], left_value, right_value)?;
    let mut last = (left, left_value);

    for iter in 1..=config.max_iters() {
        let x = bracket.midpoint();
        let residual = eval(f, x)?;
        trace!("bisection iter {iter}: x = {x}, f(x) = {residual}");

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                bracket: bracket.as_array(),
                iters: iter,
            });
        }

        #[allow(clippy::float_cmp)]
        if residual == 0.0 {
            return Ok(exact_root(x, bracket.as_array(), iter));
        }

        bracket.shrink(x, residual);

        if bracket.width() < config.x_tol() || bracket.is_exhausted() {
            debug!("bisection converged after {iter} iterations: x = {x}");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                bracket: bracket.as_array(),
                iters: iter,
            });
        }

        last = (x, residual);
    }

    warn!(
        "bisection reached {} iterations with bracket width {}",
        config.max_iters(),
        bracket.width()
    );
    let (x, residual) = last;
    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual,
        bracket: bracket.as_array(),
        iters: config.max_iters(),
    })
}

/// Runs bisection without observation.
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

fn exact_root(x: f64, bracket: [f64; 2], iters: usize) -> Solution {
    debug!("bisection hit an exact root at x = {x}");
    Solution {
        status: Status::Converged,
        x,
        residual: 0.0,
        bracket,
        iters,
    }
}
