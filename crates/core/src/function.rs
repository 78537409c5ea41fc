/// A scalar equation `f(x) = 0` in one unknown.
///
/// Implementations must be pure: the same `x` always yields the same value
/// and evaluation has no side effects. Solvers may call [`eval`] any number
/// of times at the same point.
///
/// Every `Fn(f64) -> f64` is a `ScalarFunction`, so plain closures and
/// function items can be passed directly.
///
/// [`eval`]: ScalarFunction::eval
pub trait ScalarFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// One equation `f_i(x) = 0` of a system in `n` unknowns.
///
/// A system of `n` equations is an ordered slice of `n` vector functions;
/// function `i` contributes row `i` of the residual vector and the Jacobian.
/// The same purity rules as [`ScalarFunction`] apply.
///
/// Every `Fn(&[f64]) -> f64` is a `VectorFunction`, including unsized
/// `dyn Fn` values, so a `Vec<Box<dyn Fn(&[f64]) -> f64>>` can hold
/// equations built from different closures.
pub trait VectorFunction {
    /// Evaluates the equation at `x`.
    fn eval(&self, x: &[f64]) -> f64;
}

impl<F> VectorFunction for F
where
    F: Fn(&[f64]) -> f64 + ?Sized,
{
    fn eval(&self, x: &[f64]) -> f64 {
        self(x)
    }
}
