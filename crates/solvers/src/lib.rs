//! Numerical solvers for scalar equations and small nonlinear systems.
//!
//! # Modules
//!
//! - [`equation`] — root finding for a single scalar equation
//!   ([`bisection`](equation::bisection), [`secant`](equation::secant))
//! - [`system`] — systems of `n` equations in `n` unknowns
//!   ([`newton`](system::newton), [`seidel`](system::seidel),
//!   [`secant`](system::secant))
//! - [`linear`] — dense linear systems ([`gauss`](linear::gauss))
//! - [`jacobian`] — finite-difference Jacobian estimation
//! - [`classic`] — flat entry points that return bare estimates
//!
//! Every iterative solver accepts an [`Observer`] and reports how it
//! terminated through a `Status`, so hitting the iteration cap is never
//! mistaken for convergence. Solvers log through the [`log`] facade and
//! never install a logger.
//!
//! [`Observer`]: nlsolve_core::Observer

pub mod classic;
pub mod equation;
pub mod jacobian;
pub mod linear;
pub mod system;
