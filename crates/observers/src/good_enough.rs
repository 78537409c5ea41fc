use nlsolve_core::Observer;

use crate::traits::{CanStopEarly, HasResidual, HasStepNorm};

/// Stops a scalar solver once `|residual|` drops below a tolerance.
///
/// Useful when a loose answer is acceptable but the solver is configured for
/// a tight bracket or residual. `min_iters` events are always let through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodEnough {
    tolerance: f64,
    min_iters: usize,
    seen: usize,
}

impl GoodEnough {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 0,
            seen: 0,
        }
    }

    /// Never stops before `min_iters` events have been observed.
    #[must_use]
    pub fn with_min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.min_iters && event.residual().abs() < self.tolerance)
            .then(A::stop_early)
    }
}

/// Stops a system solver once the step norm drops below a tolerance.
///
/// The counterpart of [`GoodEnough`] for solvers that track step size rather
/// than a single residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallStep {
    tolerance: f64,
}

impl SmallStep {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl<E: HasStepNorm, A: CanStopEarly> Observer<E, A> for SmallStep {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.step_norm() < self.tolerance).then(A::stop_early)
    }
}
