//! Error types for the Gaussian elimination solver.
//!
//! Input problems (unparsable fields, empty or mismatched dimensions) and
//! numerical failure (a collapsed pivot) are separate variants so that callers
//! can report them differently.

use thiserror::Error;

/// Errors that can occur while building or solving a linear system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A user-supplied field could not be turned into a valid value.
    #[error("invalid input in field '{field}': '{value}' ({reason})")]
    InvalidInput {
        /// Name of the offending field (e.g. `size`, `a[2][1]`, `b[3]`)
        field: String,
        /// Raw text that was rejected
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The system has no equations.
    #[error("empty system: at least one equation is required")]
    EmptySystem,

    /// Matrix is not square, or the right-hand side has the wrong length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length (the system dimension n)
        expected: usize,
        /// Actual length found
        got: usize,
    },

    /// A pivot fell below the tolerance: no unique solution exists.
    #[error("matrix is singular: pivot in column {column} is below tolerance")]
    SingularMatrix {
        /// Zero-based column where elimination stopped
        column: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Build an [`SolverError::InvalidInput`] from borrowed parts.
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SolverError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a caller-side input error.
    ///
    /// This includes `InvalidInput`, `EmptySystem` and `DimensionMismatch`:
    /// everything that is rejected before elimination starts.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidInput { .. }
                | SolverError::EmptySystem
                | SolverError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is a dimension error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::EmptySystem | SolverError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if the system has no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(self, SolverError::SingularMatrix { .. })
    }
}
