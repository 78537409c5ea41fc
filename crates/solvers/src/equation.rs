//! Solvers for scalar equations, finding a root of `f(x) = 0`.
//!
//! Both solvers take a [`ScalarFunction`] and an interval `[a, b]`.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracket with a sign change
//! - [`secant`] — bracket-style secant (false position) iteration without a
//!   sign-change precondition
//!
//! [`ScalarFunction`]: nlsolve_core::ScalarFunction

pub mod bisection;
pub mod secant;
