//! Derivative-free secant iteration for systems.
//!
//! Each component is updated independently from the current iterate `x` and
//! the previous iterate `p`:
//!
//! ```text
//! x'_i = x_i - f_i(x) * gap_i / (f_i(x) - f_i(p))
//! ```
//!
//! where `gap_i` is a difference of neighboring components of `x`:
//! `x[1] - x[0]` for the first, `x[n-1] - x[n-2]` for the last and
//! `x[i+1] - x[i-1]` for interior components. A single equation uses the
//! classical secant gap `x[0] - p[0]`.
//!
//! The previous iterate for the first step is `x0 * (1 + 1e-4) + 1e-4`.
//!
//! For a single equation this is the classical secant method and converges
//! superlinearly near a simple root. For two or more equations it is a
//! heuristic, not a quasi-Newton method: the gap is not the change of the
//! unknown being updated, so the ratio is not a derivative estimate. It
//! ignores coupling between equations and in practice diverges even on
//! decoupled linear systems, ending in [`Status::MaxIters`] with a step norm
//! that grows each iteration. Use [`newton`] or [`seidel`] for real systems.
//!
//! Equal neighboring components make the gap zero, which gives a zero step
//! and a false fixed point. Set `residual_tol` to have that reported as
//! [`Status::Stalled`].
//!
//! [`Status::MaxIters`]: super::Status::MaxIters
//! [`newton`]: super::newton
//! [`seidel`]: super::seidel
//!
//! [`Status::Stalled`]: super::Status::Stalled

use log::{debug, trace, warn};
use nlsolve_core::{Observer, VectorFunction};

use super::{Action, Config, Error, Event, Solution, Status};

/// Relative and absolute offset of the seeded previous iterate.
const SEED_OFFSET: f64 = 1e-4;

/// Solves the system `fs` starting from `x0`.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, an equation returns a
/// non-finite value, or an equation takes the same value at consecutive
/// iterates.
pub fn solve<F, Obs>(
    fs: &[F],
    x0: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    super::validate(fs, x0, config)?;
    debug!("secant: {} equations from x0 = {x0:?}", fs.len());

    let n = x0.len();
    let mut x = x0.to_vec();
    let mut previous: Vec<f64> = x0
        .iter()
        .map(|v| v * (1.0 + SEED_OFFSET) + SEED_OFFSET)
        .collect();
    let mut previous_values = super::residuals(fs, &previous)?;
    let mut step_norm = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let values = super::residuals(fs, &x)?;

        let mut delta = vec![0.0; n];
        for (i, step) in delta.iter_mut().enumerate() {
            let change = values[i] - previous_values[i];
            #[allow(clippy::float_cmp)]
            if change == 0.0 {
                return Err(Error::StagnantIteration { iter, index: i });
            }
            *step = -values[i] * gap(&x, &previous, i) / change;
        }

        previous.clone_from(&x);
        previous_values = values;
        for (xi, di) in x.iter_mut().zip(&delta) {
            *xi += di;
        }
        step_norm = super::max_abs(&delta);
        trace!("secant iter {iter}: step norm {step_norm:e}");

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
        "secant reached {} iterations with step norm {step_norm:e}",
        config.max_iters()
    );
    Ok(super::finish(fs, x, step_norm, config.max_iters(), Status::MaxIters))
}

/// Runs the secant iteration without observation.
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

/// Difference used as the secant run length for component `i`.
fn gap(x: &[f64], previous: &[f64], i: usize) -> f64 {
    let n = x.len();
    if n == 1 {
        x[0] - previous[0]
    } else if i == 0 {
        x[1] - x[0]
    } else if i == n - 1 {
        x[i] - x[i - 1]
    } else {
        x[i + 1] - x[i - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    type System = Vec<Box<dyn Fn(&[f64]) -> f64>>;

    #[test]
    fn gap_uses_neighbors() {
        let x = [1.0, 2.0, 4.0, 8.0];
        let previous = [0.0; 4];

        assert_eq!(gap(&x, &previous, 0), 1.0);
        assert_eq!(gap(&x, &previous, 1), 3.0);
        assert_eq!(gap(&x, &previous, 2), 6.0);
        assert_eq!(gap(&x, &previous, 3), 4.0);
        assert_eq!(gap(&[3.0], &[2.5], 0), 0.5);
    }

    #[test]
    fn single_equation_is_the_classical_secant() {
        let fs = [|x: &[f64]| x[0] * x[0] - 4.0];

        let mut first = None;
        let observer = |event: &Event<'_>| {
            if first.is_none() {
                first = Some(event.x[0]);
            }
            None
        };

        let solution = solve(&fs, &[1.0], &Config::default(), observer).expect("solves");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x[0], 2.0, epsilon = 1e-12);
        assert_eq!(solution.iters, 8);

        // Seeded previous iterate is 1.0002.
        let expected = 1.0 + 6e-4 / (1.000_2_f64.powi(2) - 1.0);
        assert_relative_eq!(first.expect("observed"), expected, epsilon = 1e-9);
    }

    #[test]
    fn equal_components_give_a_false_fixed_point() {
        let fs: System = vec![
            Box::new(|x: &[f64]| x[0] * x[0] - 4.0),
            Box::new(|x: &[f64]| x[1] * x[1] - 9.0),
        ];

        let lenient = solve_unobserved(&fs, &[1.0, 1.0], &Config::default()).expect("runs");
        assert_eq!(lenient.status, Status::Converged);
        assert_eq!(lenient.iters, 1);
        assert_eq!(lenient.x, vec![1.0, 1.0]);

        let strict = Config::new(100, 1e-10, Some(1e-6)).expect("valid config");
        let checked = solve_unobserved(&fs, &[1.0, 1.0], &strict).expect("runs");
        assert_eq!(checked.status, Status::Stalled);
        assert_eq!(checked.residuals, vec![-3.0, -8.0]);
    }

    #[test]
    fn diverges_on_line_and_circle() {
        let fs: System = vec![
            Box::new(|x: &[f64]| x[0] + x[1] - 3.0),
            Box::new(|x: &[f64]| x[0] * x[0] + x[1] * x[1] - 9.0),
        ];

        let mut norms = Vec::new();
        let observer = |event: &Event<'_>| {
            norms.push(event.step_norm);
            None
        };

        let solution = solve(&fs, &[1.0, 5.0], &Config::default(), observer).expect("runs");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 100);
        assert_eq!(norms.len(), 100);
        assert!(norms[0] > 1e4);
        assert!(norms[99] > 1e20 * norms[0]);
        assert!(solution.x.iter().all(|v| v.abs() > 1e20));
    }

    #[test]
    fn diverges_on_a_nearly_decoupled_system() {
        let fs: System = vec![
            Box::new(|x: &[f64]| x[0] * x[0] - 4.0 + 0.1 * x[1]),
            Box::new(|x: &[f64]| x[1] * x[1] - 9.0 + 0.1 * x[0]),
        ];

        let solution = solve_unobserved(&fs, &[1.5, 3.5], &Config::default()).expect("runs");

        assert_eq!(solution.status, Status::MaxIters);
        assert!(solution.x[0] < -1e7 && solution.x[1] < -1e7);
        assert!(solution.residual_norm() > 1e14);
    }

    #[test]
    fn unchanged_equation_is_stagnant() {
        let fs: System = vec![
            Box::new(|x: &[f64]| x[0] + x[1] - 3.0),
            Box::new(|x: &[f64]| x[0] - x[1] - 1.0),
        ];

        let result = solve_unobserved(&fs, &[1.0, 1.0], &Config::default());

        assert_eq!(result, Err(Error::StagnantIteration { iter: 1, index: 1 }));
    }

    #[test]
    fn repeated_solves_are_identical() {
        let fs = [|x: &[f64]| x[0].powi(3) - 2.0];
        let config = Config::default();

        let first = solve_unobserved(&fs, &[1.0], &config).expect("solves");
        let second = solve_unobserved(&fs, &[1.0], &config).expect("solves");

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_empty_system() {
        let fs: System = Vec::new();

        let result = solve_unobserved(&fs, &[], &Config::default());

        assert_eq!(result, Err(Error::EmptySystem));
    }
}
