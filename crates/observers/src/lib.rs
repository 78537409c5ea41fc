//! Reusable observers for the nlsolve solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `nlsolve-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStepNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs every event through the `log` facade
//! - [`Cancellation`] — cooperative cancellation from another thread
//! - [`GoodEnough`] — stops a scalar solver once the residual is small enough
//! - [`SmallStep`] — stops a system solver once the step is small enough
//!
//! [`Observer`]: nlsolve_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStepNorm`]: traits::HasStepNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod good_enough;
mod logging;

pub use cancel::Cancellation;
pub use good_enough::{GoodEnough, SmallStep};
pub use logging::LogObserver;
