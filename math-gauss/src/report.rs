//! Human-readable rendering of solutions and errors

use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::Array1;

/// Number of decimals shown for each unknown
pub const DEFAULT_PRECISION: usize = 4;

/// Render a solution as one `xi = value` line per unknown (1-based).
pub fn format_solution<T: RealField>(x: &Array1<T>, precision: usize) -> String {
    x.iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {:.*}", i + 1, precision, v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message shown to a user for a failed solve.
///
/// Singular systems and malformed input get different wording, since the
/// user has to react differently to each.
pub fn user_message(err: &SolverError) -> String {
    match err {
        SolverError::SingularMatrix { .. } => {
            "The system has no unique solution (it is singular or indeterminate).".to_string()
        }
        SolverError::InvalidInput { .. }
        | SolverError::EmptySystem
        | SolverError::DimensionMismatch { .. } => {
            format!("Check that every field is filled in correctly: {err}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_solution() {
        let x = array![2.0_f64, 3.0, -1.0];
        assert_eq!(
            format_solution(&x, DEFAULT_PRECISION),
            "x1 = 2.0000\nx2 = 3.0000\nx3 = -1.0000"
        );
    }

    #[test]
    fn test_format_solution_precision() {
        let x = array![1.0_f64 / 3.0];
        assert_eq!(format_solution(&x, 2), "x1 = 0.33");
        assert_eq!(format_solution(&x, 0), "x1 = 0");
    }

    #[test]
    fn test_user_message_distinguishes_causes() {
        let singular = user_message(&SolverError::SingularMatrix { column: 0 });
        let input = user_message(&SolverError::invalid_input("a[1][1]", "x", "not a number"));

        assert!(singular.contains("no unique solution"));
        assert!(input.starts_with("Check that every field"));
        assert!(input.contains("a[1][1]"));
        assert_ne!(singular, input);
    }
}
