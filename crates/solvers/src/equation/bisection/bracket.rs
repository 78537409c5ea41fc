use thiserror::Error;

/// Why a pair of endpoints cannot start a bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,

    #[error("bracket endpoints are equal")]
    ZeroWidth,

    /// `f` has the same sign at both endpoints.
    #[error("f does not change sign across the bracket")]
    NoSignChange,
}

/// Sorts the endpoints after checking they span a finite, non-empty interval.
pub(super) fn ordered([a, b]: [f64; 2]) -> Result<[f64; 2], BracketError> {
    if !(a.is_finite() && b.is_finite()) {
        return Err(BracketError::NonFinite);
    }

    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(BracketError::ZeroWidth);
    }

    Ok(if a < b { [a, b] } else { [b, a] })
}

/// An interval `[lo, hi]` over which `f` changes sign.
///
/// Only the sign at `lo` is stored: the sign at `hi` is its opposite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lo: f64,
    hi: f64,
    negative_at_lo: bool,
}

impl Bracket {
    /// Builds a bracket from ordered endpoints and the values of `f` there.
    ///
    /// Values are compared by sign, never multiplied, so tiny values of
    /// opposite sign are not lost to underflow. Exact zeros must be handled
    /// by the caller.
    pub(super) fn new([lo, hi]: [f64; 2], f_lo: f64, f_hi: f64) -> Result<Self, BracketError> {
        let negative_at_lo = f_lo < 0.0;
        if negative_at_lo == (f_hi < 0.0) {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            lo,
            hi,
            negative_at_lo,
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    pub(super) fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True once no float lies strictly between the endpoints.
    ///
    /// Halving cannot narrow the bracket further, whatever the tolerance.
    pub(super) fn is_exhausted(&self) -> bool {
        let mid = self.midpoint();
        mid <= self.lo || mid >= self.hi
    }

    /// Replaces whichever endpoint has the same sign as `value` with `x`.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if (value < 0.0) == self.negative_at_lo {
            self.lo = x;
        } else {
            self.hi = x;
        }
    }
}
