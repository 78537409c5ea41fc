use log::{debug, trace, warn};
use nlsolve_core::{Observer, VectorFunction};

use crate::{
    jacobian::{self, Difference},
    linear::gauss,
};

use super::{Action, Config, Error, Event, Solution, Status};

/// Runs a Newton-Raphson iteration with a finite-difference Jacobian.
///
/// Each step solves `J(x) delta = -f(x)` and sets `x += delta`.
pub(super) fn solve<F, Obs>(
    fs: &[F],
    x0: &[f64],
    config: &Config,
    difference: Difference,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    super::validate(fs, x0, config)?;

    let method = match difference {
        Difference::Forward => "newton",
        Difference::Central => "seidel",
    };
    debug!("{method}: {} equations from x0 = {x0:?}", fs.len());

    let linear_config = gauss::Config::default();
    let mut x = x0.to_vec();
    let mut step_norm = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let rhs: Vec<f64> = super::residuals(fs, &x)?.into_iter().map(|r| -r).collect();
        let jacobian = jacobian::estimate(fs, &x, difference)?;
        let delta = gauss::solve(jacobian, rhs, &linear_config)?;

        for (xi, di) in x.iter_mut().zip(&delta) {
            *xi += di;
        }
        step_norm = super::max_abs(&delta);
        trace!("{method} iter {iter}: step norm {step_norm:e}");

        let event = Event {
            iter,
            x: &x,
            delta: &delta,
            step_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(super::finish(fs, x, step_norm, iter, Status::StoppedByObserver));
        }

        if step_norm < config.step_tol() {
            return super::converged(fs, x, step_norm, iter, config);
        }
    }

    warn!(
        "{method} reached {} iterations with step norm {step_norm:e}",
        config.max_iters()
    );
    Ok(super::finish(fs, x, step_norm, config.max_iters(), Status::MaxIters))
}
