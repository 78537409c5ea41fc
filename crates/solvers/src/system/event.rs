/// Event emitted by the system solvers after each update of the iterate.
///
/// Borrows the solver's buffers; observers that need the values after
/// returning must copy them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The updated iterate.
    pub x: &'a [f64],

    /// The step that produced `x`.
    pub delta: &'a [f64],

    /// `max_i |delta_i|`.
    pub step_norm: f64,
}
