//! Core traits and types for nlsolve.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`] — a pure mapping `f64 -> f64` whose roots are sought
//! - [`VectorFunction`] — one equation of a system, a pure mapping `&[f64] -> f64`
//! - [`Matrix`] — a dense square matrix for Jacobians and linear systems
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod matrix;
mod observer;

pub use function::{ScalarFunction, VectorFunction};
pub use matrix::{Matrix, MatrixError};
pub use observer::Observer;
