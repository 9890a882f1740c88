//! Linear system request value
//!
//! A [`LinearSystem`] bundles the coefficient matrix and right-hand side of one
//! solve request. It is validated once on construction (non-empty, square,
//! matching lengths, finite entries) and is immutable afterwards.

use crate::direct::{GaussConfig, check_dimensions, gauss_solve_with};
use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// A square system Ax = b ready to be solved
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: RealField> {
    a: Array2<T>,
    b: Array1<T>,
}

impl<T: RealField> LinearSystem<T> {
    /// Build a system from a coefficient matrix and right-hand side.
    pub fn new(a: Array2<T>, b: Array1<T>) -> Result<Self> {
        check_dimensions(&a, &b)?;

        if let Some(((i, j), v)) = a.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SolverError::invalid_input(
                format!("a[{}][{}]", i + 1, j + 1),
                v.to_string(),
                "coefficient must be finite",
            ));
        }
        if let Some((i, v)) = b.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SolverError::invalid_input(
                format!("b[{}]", i + 1),
                v.to_string(),
                "independent term must be finite",
            ));
        }

        Ok(Self { a, b })
    }

    /// Build a system from nested rows, as produced by a form or a file.
    pub fn from_rows(rows: Vec<Vec<T>>, b: Vec<T>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SolverError::EmptySystem);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: row.len(),
            });
        }

        let a = Array2::from_shape_fn((n, n), |(i, j)| rows[i][j]);
        Self::new(a, Array1::from_vec(b))
    }

    /// Number of equations (and unknowns)
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Coefficient matrix
    pub fn matrix(&self) -> &Array2<T> {
        &self.a
    }

    /// Right-hand side
    pub fn rhs(&self) -> &Array1<T> {
        &self.b
    }

    /// Split into the matrix and right-hand side
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.a, self.b)
    }

    /// Solve with the default configuration
    pub fn solve(&self) -> Result<Array1<T>> {
        self.solve_with(&GaussConfig::default())
    }

    /// Solve with an explicit configuration
    pub fn solve_with(&self, config: &GaussConfig) -> Result<Array1<T>> {
        gauss_solve_with(&self.a, &self.b, config)
    }

    /// Per-equation absolute residual |A x - b|
    pub fn residual(&self, x: &Array1<T>) -> Result<Array1<T>> {
        if x.len() != self.dim() {
            return Err(SolverError::DimensionMismatch {
                expected: self.dim(),
                got: x.len(),
            });
        }
        let ax = self.a.dot(x);
        Ok((&ax - &self.b).mapv(|r| r.abs()))
    }

    /// Largest per-equation residual
    pub fn max_residual(&self, x: &Array1<T>) -> Result<T> {
        let r = self.residual(x)?;
        Ok(r.iter().fold(T::zero(), |acc, &v| acc.max(v)))
    }
}
