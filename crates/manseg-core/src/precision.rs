//! Published precision constants and the reduced/full switching decision.
//!
//! None of these values are enforced by the storage types. They are
//! guidance for iterative algorithms that run early sweeps in reduced
//! precision and need to know when to move to full precision.

/// Highest precision achievable with the head segment alone.
///
/// 20 mantissa bits give roughly six decimal digits.
pub const MAX_SINGLE_SEGMENT_PRECISION: f64 = 1e-6;

/// Recommended residual at which to switch from reduced to full precision.
pub const ADAPTIVE_PRECISION_BOUND: f64 = 5e-5;

/// Exact bound on the relative truncation error of a normal double read
/// back through the head segment: `2^-20`.
pub const REDUCED_RELATIVE_ERROR: f64 = 1.0 / 1_048_576.0;

/// Relative error of `approx` with respect to `exact`.
///
/// Falls back to the absolute error when `exact` is zero.
pub fn relative_error(approx: f64, exact: f64) -> f64 {
    if exact == 0.0 {
        approx.abs()
    } else {
        ((approx - exact) / exact).abs()
    }
}

/// Which segments an algorithm should be reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecisionMode {
    /// Head segment only.
    Reduced,
    /// Head and tail recombined.
    Full,
}

impl PrecisionMode {
    /// Pick a mode for the given residual using [`ADAPTIVE_PRECISION_BOUND`].
    pub fn for_residual(residual: f64) -> Self {
        Self::for_residual_with(residual, ADAPTIVE_PRECISION_BOUND)
    }

    /// Pick a mode for the given residual against a caller-chosen bound.
    ///
    /// Stays in [`PrecisionMode::Reduced`] while `|residual| > bound`. A NaN
    /// residual selects [`PrecisionMode::Full`].
    pub fn for_residual_with(residual: f64, bound: f64) -> Self {
        if residual.abs() > bound {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    /// Whether this mode reads the tail segment.
    pub fn uses_tail(self) -> bool {
        matches!(self, Self::Full)
    }
}
