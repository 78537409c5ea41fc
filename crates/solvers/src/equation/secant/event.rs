/// Event emitted by the secant solver after each new estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The pair of points the estimate was interpolated from.
    pub bracket: [f64; 2],

    /// The new estimate.
    pub x: f64,

    /// Function value at the new estimate.
    pub residual: f64,
}
