/// Event emitted by the bisection solver after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket the midpoint was taken from.
    pub bracket: [f64; 2],

    /// The midpoint.
    pub x: f64,

    /// Function value at the midpoint.
    pub residual: f64,
}
