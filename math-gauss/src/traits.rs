//! Scalar trait for the solver
//!
//! [`RealField`] abstracts over `f64` and `f32` so the elimination code is
//! written once. Complex scalars are deliberately not supported.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types usable by the Gaussian elimination solver.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, used by the parsers and the CLI)
/// - `f32` (for memory-constrained callers; expect looser residuals)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
    /// Convert an `f64` constant (tolerances, literals) into this type.
    fn from_f64_lossy(value: f64) -> Self;

    /// Check if this is approximately zero under an absolute tolerance.
    #[inline]
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.abs() < tol
    }
}

impl RealField for f64 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

impl RealField for f32 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_f64_field() {
        let x = f64::from_f64_lossy(0.25);
        assert_relative_eq!(x, 0.25);
        assert!(1e-13_f64.is_zero_approx(1e-12));
        assert!(!(-1e-11_f64).is_zero_approx(1e-12));
    }

    #[test]
    fn test_f32_field() {
        let x = f32::from_f64_lossy(1e-12);
        assert!(x > 0.0);
        assert!((-1e-13_f32).is_zero_approx(x));
    }
}
