/// How a system solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The step fell below `step_tol`, and the residual check passed when
    /// one is configured.
    Converged,

    /// The step fell below `step_tol` but the residuals are still above
    /// `residual_tol`.
    Stalled,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a system solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The final iterate.
    pub x: Vec<f64>,

    /// Residuals `f_i(x)` at the final iterate.
    ///
    /// Finite when converged or stalled. After [`Status::MaxIters`] or
    /// [`Status::StoppedByObserver`] they may be non-finite if the last
    /// step left the domain of an equation.
    pub residuals: Vec<f64>,

    /// Norm of the last step.
    pub step_norm: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns `max_i |f_i(x)|`, or NaN if any residual is NaN.
    #[must_use]
    pub fn residual_norm(&self) -> f64 {
        if self.residuals.iter().any(|r| r.is_nan()) {
            return f64::NAN;
        }
        super::max_abs(&self.residuals)
    }
}
