//! Solvers for dense linear systems `A x = b`.
//!
//! # Solvers
//!
//! - [`gauss`] — Gaussian elimination without pivoting

pub mod gauss;
