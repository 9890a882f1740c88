//! Gaussian elimination solver
//!
//! Reduces the augmented system (A | b) to upper-triangular form using
//! partial pivoting, then recovers x by back-substitution.
//!
//! Caller data is never modified: the borrowed entry points copy A and b
//! before eliminating, and [`gauss_solve_owned`] consumes them. A failed solve
//! therefore cannot leave a half-eliminated matrix behind.

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Absolute pivot threshold below which a column is treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Pivots within this factor of the tolerance are reported as a warning.
const NEAR_SINGULAR_FACTOR: f64 = 1e4;

/// Gaussian elimination configuration
///
/// The tolerance is absolute and is not scaled with the magnitude of the
/// coefficients: matrices with very large or very small entries may be
/// misclassified as (non-)singular.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussConfig {
    /// Pivots with |value| below this are treated as zero
    #[serde(default = "default_pivot_tolerance")]
    pub pivot_tolerance: f64,
    /// Log every row exchange at info level
    #[serde(default)]
    pub log_pivots: bool,
}

fn default_pivot_tolerance() -> f64 {
    DEFAULT_PIVOT_TOLERANCE
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            log_pivots: false,
        }
    }
}

impl GaussConfig {
    /// Set the absolute pivot tolerance
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Enable or disable row exchange logging
    pub fn with_log_pivots(mut self, enabled: bool) -> Self {
        self.log_pivots = enabled;
        self
    }

    /// Check that the pivot tolerance is finite and strictly positive.
    ///
    /// A zero, negative or NaN tolerance would never flag a zero pivot, and
    /// a singular system would then divide by zero instead of failing.
    pub fn validate(&self) -> Result<()> {
        let tol = self.pivot_tolerance;
        if !(tol.is_finite() && tol > 0.0) {
            return Err(SolverError::invalid_input(
                "pivot_tolerance",
                tol.to_string(),
                "must be finite and greater than 0",
            ));
        }
        Ok(())
    }
}

/// Result of the forward elimination phase
///
/// Holds the reduced system U x = c, where U is upper triangular with
/// non-negligible diagonal entries.
#[derive(Debug, Clone)]
pub struct UpperTriangular<T: RealField> {
    /// Reduced coefficient matrix (zeros below the diagonal up to rounding)
    pub u: Array2<T>,
    /// Reduced right-hand side
    pub c: Array1<T>,
    /// `row_order[i]` is the original index of the equation now in row `i`
    pub row_order: Vec<usize>,
    /// System dimension
    pub n: usize,
}

impl<T: RealField> UpperTriangular<T> {
    /// Pivots used during elimination, in column order
    pub fn diagonal(&self) -> Array1<T> {
        self.u.diag().to_owned()
    }

    /// Solve U x = c from the last row upwards.
    ///
    /// Every diagonal entry was checked against the tolerance during
    /// elimination, so no division here can be by a negligible pivot.
    pub fn back_substitute(&self) -> Array1<T> {
        let n = self.n;
        let mut x = Array1::from_elem(n, T::zero());

        for i in (0..n).rev() {
            let mut sum_ax = T::zero();
            for j in (i + 1)..n {
                sum_ax += self.u[[i, j]] * x[j];
            }
            x[i] = (self.c[i] - sum_ax) / self.u[[i, i]];
        }

        x
    }
}

/// Check that `a` is square with side n >= 1 and `b` has length n.
pub(crate) fn check_dimensions<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<usize> {
    let n = a.nrows();
    if n == 0 {
        return Err(SolverError::EmptySystem);
    }
    if a.ncols() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(n)
}

/// Forward elimination with partial pivoting on copies of `a` and `b`.
pub fn eliminate<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussConfig,
) -> Result<UpperTriangular<T>> {
    check_dimensions(a, b)?;
    eliminate_owned(a.clone(), b.clone(), config)
}

/// Forward elimination with partial pivoting, consuming `a` and `b`.
pub fn eliminate_owned<T: RealField>(
    mut a: Array2<T>,
    mut b: Array1<T>,
    config: &GaussConfig,
) -> Result<UpperTriangular<T>> {
    let n = check_dimensions(&a, &b)?;
    config.validate()?;
    let tol = T::from_f64_lossy(config.pivot_tolerance);
    if tol <= T::zero() {
        return Err(SolverError::invalid_input(
            "pivot_tolerance",
            config.pivot_tolerance.to_string(),
            "underflows to 0 in the scalar type",
        ));
    }
    let near_singular = T::from_f64_lossy(config.pivot_tolerance * NEAR_SINGULAR_FACTOR);
    let mut row_order: Vec<usize> = (0..n).collect();

    for i in 0..n {
        // Largest magnitude in column i; strict '>' keeps the first maximum
        let mut max_val = a[[i, i]].abs();
        let mut max_row = i;
        for r in (i + 1)..n {
            let val = a[[r, i]].abs();
            if val > max_val {
                max_val = val;
                max_row = r;
            }
        }

        if max_row != i {
            for k in 0..n {
                a.swap([i, k], [max_row, k]);
            }
            b.swap(i, max_row);
            row_order.swap(i, max_row);

            if config.log_pivots {
                log::info!(
                    "Gauss column {}: exchanged rows {} and {} (pivot = {:.6e})",
                    i,
                    i,
                    max_row,
                    max_val.to_f64().unwrap_or(f64::NAN)
                );
            }
        }

        let pivot = a[[i, i]];
        if pivot.is_zero_approx(tol) {
            log::debug!(
                "Gauss column {}: pivot {:.3e} below tolerance {:.3e}",
                i,
                pivot.to_f64().unwrap_or(f64::NAN),
                config.pivot_tolerance
            );
            return Err(SolverError::SingularMatrix { column: i });
        }
        if pivot.abs() < near_singular {
            log::warn!(
                "Gauss column {}: pivot {:.3e} is close to the tolerance, \
                 solution may be inaccurate",
                i,
                pivot.to_f64().unwrap_or(f64::NAN)
            );
        }

        for j in (i + 1)..n {
            let factor = a[[j, i]] / pivot;
            for k in i..n {
                let update = factor * a[[i, k]];
                a[[j, k]] -= update;
            }
            let update = factor * b[i];
            b[j] -= update;
        }
    }

    log::debug!("Gauss elimination of {}x{} system completed", n, n);

    Ok(UpperTriangular {
        u: a,
        c: b,
        row_order,
        n,
    })
}

/// Solve Ax = b with the default configuration
pub fn gauss_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    gauss_solve_with(a, b, &GaussConfig::default())
}

/// Solve Ax = b; `a` and `b` are left untouched.
pub fn gauss_solve_with<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussConfig,
) -> Result<Array1<T>> {
    let reduced = eliminate(a, b, config)?;
    Ok(reduced.back_substitute())
}

/// Solve Ax = b, taking ownership of the inputs to avoid copying them.
pub fn gauss_solve_owned<T: RealField>(
    a: Array2<T>,
    b: Array1<T>,
    config: &GaussConfig,
) -> Result<Array1<T>> {
    let reduced = eliminate_owned(a, b, config)?;
    Ok(reduced.back_substitute())
}
