//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasStepNorm`] — events that carry the size of the last step
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nlsolve_core::Observer;
//! use nlsolve_observers::traits::{CanStopEarly, HasResidual};
//! use nlsolve_solvers::equation::bisection;
//!
//! /// Stops the first time the residual changes sign.
//! struct SignFlip {
//!     last: Option<f64>,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for SignFlip {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let residual = event.residual();
//!         let flipped = self.last.is_some_and(|last| last * residual < 0.0);
//!         self.last = Some(residual);
//!         flipped.then(A::stop_early)
//!     }
//! }
//!
//! let f = |x: f64| x - 0.3;
//! let config = bisection::Config::default();
//! let solution = bisection::solve(&f, [0.0, 1.0], &config, SignFlip { last: None })?;
//!
//! assert_eq!(solution.status, bisection::Status::StoppedByObserver);
//! # Ok::<(), bisection::Error>(())
//! ```

use nlsolve_solvers::{
    equation::{bisection, secant},
    system,
};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries the size of the step just taken.
pub trait HasStepNorm {
    /// Returns `max_i |delta_i|` for this event.
    fn step_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasResidual impls ---

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for secant::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- HasStepNorm for system::Event ---

impl HasStepNorm for system::Event<'_> {
    fn step_norm(&self) -> f64 {
        self.step_norm
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for system::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
