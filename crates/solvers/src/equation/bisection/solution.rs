/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The bracket shrank below `x_tol`, or an exact root was hit.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last midpoint, or the endpoint that is an exact root.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Bracket after the final iteration.
    pub bracket: [f64; 2],

    /// Iteration count when the solver finished.
    pub iters: usize,
}
