//! Text input parsing
//!
//! Turns the raw fields of an input form (system size, n² coefficients and
//! n independent terms) into a validated [`LinearSystem`]. Every failure is a
//! [`SolverError::InvalidInput`] naming the field with 1-based indices, so a
//! front end can point at it.

use crate::error::{Result, SolverError};
use crate::system::LinearSystem;

/// Parse the number of equations/unknowns (must be an integer >= 1).
pub fn parse_size(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SolverError::invalid_input("size", text, "missing field"));
    }
    let size: i64 = trimmed
        .parse()
        .map_err(|_| SolverError::invalid_input("size", text, "not an integer"))?;
    if size < 1 {
        return Err(SolverError::invalid_input("size", text, "must be at least 1"));
    }
    usize::try_from(size).map_err(|_| SolverError::invalid_input("size", text, "too large"))
}

/// Parse one numeric field; `name` is used in the error.
pub fn parse_field(name: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SolverError::invalid_input(name, text, "missing field"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| SolverError::invalid_input(name, text, "not a number"))?;
    if !value.is_finite() {
        return Err(SolverError::invalid_input(name, text, "must be finite"));
    }
    Ok(value)
}

/// Split a line into fields separated by commas, semicolons or whitespace.
pub fn split_fields(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse a row of coefficients; `row` is the 1-based equation number used
/// in field names.
pub fn parse_row(row: usize, text: &str) -> Result<Vec<f64>> {
    split_fields(text)
        .into_iter()
        .enumerate()
        .map(|(j, token)| parse_field(&format!("a[{}][{}]", row, j + 1), token))
        .collect()
}

/// Build a system from form fields.
///
/// `coefficients[i][j]` is the coefficient of x(j+1) in equation i+1 and
/// `rhs[i]` its independent term. Missing fields are reported as invalid
/// input; surplus fields as a dimension mismatch.
pub fn parse_fields<S: AsRef<str>>(
    size: usize,
    coefficients: &[Vec<S>],
    rhs: &[S],
) -> Result<LinearSystem<f64>> {
    if size == 0 {
        return Err(SolverError::EmptySystem);
    }
    if coefficients.len() > size {
        return Err(SolverError::DimensionMismatch {
            expected: size,
            got: coefficients.len(),
        });
    }
    if rhs.len() > size {
        return Err(SolverError::DimensionMismatch {
            expected: size,
            got: rhs.len(),
        });
    }

    let mut rows = Vec::with_capacity(size);
    for i in 0..size {
        let fields = coefficients.get(i).map(Vec::as_slice).unwrap_or(&[]);
        if fields.len() > size {
            return Err(SolverError::DimensionMismatch {
                expected: size,
                got: fields.len(),
            });
        }

        let mut row = Vec::with_capacity(size);
        for j in 0..size {
            let name = format!("a[{}][{}]", i + 1, j + 1);
            let text = fields.get(j).map(|s| s.as_ref()).unwrap_or("");
            row.push(parse_field(&name, text)?);
        }
        rows.push(row);
    }

    let b = (0..size)
        .map(|i| {
            let text = rhs.get(i).map(|s| s.as_ref()).unwrap_or("");
            parse_field(&format!("b[{}]", i + 1), text)
        })
        .collect::<Result<Vec<f64>>>()?;

    log::debug!("Parsed {}x{} system from form fields", size, size);
    LinearSystem::from_rows(rows, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field_of(err: SolverError) -> String {
        match err {
            SolverError::InvalidInput { field, .. } => field,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(" 3 ").expect("size"), 3);
        assert!(parse_size("0").unwrap_err().is_input_error());
        assert!(parse_size("-2").unwrap_err().is_input_error());
        assert!(parse_size("2.5").unwrap_err().is_input_error());
        assert!(parse_size("").unwrap_err().is_input_error());
    }

    #[test]
    fn test_parse_field() {
        assert_relative_eq!(parse_field("b[1]", " -1.5e2 ").expect("number"), -150.0);
        assert_eq!(field_of(parse_field("b[1]", "abc").unwrap_err()), "b[1]");
        assert!(parse_field("b[1]", "inf").is_err());
        assert!(parse_field("b[1]", "NaN").is_err());
        assert!(parse_field("b[1]", "   ").is_err());
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields(" 1,2 ;3\t4 "), vec!["1", "2", "3", "4"]);
        assert!(split_fields("  ").is_empty());
    }

    #[test]
    fn test_parse_row() {
        let row = parse_row(2, "1, -2;3  4").expect("row");
        assert_eq!(row, vec![1.0, -2.0, 3.0, 4.0]);

        let err = parse_row(2, "1 x 3").unwrap_err();
        assert_eq!(field_of(err), "a[2][2]");
    }

    #[test]
    fn test_parse_fields_and_solve() {
        let coefficients = vec![
            vec!["2", "1", "-1"],
            vec!["-3", "-1", "2"],
            vec!["-2", "1", "2"],
        ];
        let rhs = vec!["8", "-11", "-3"];

        let system = parse_fields(3, &coefficients, &rhs).expect("valid fields");
        let x = system.solve().expect("solve");
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_parse_fields_missing() {
        let coefficients = vec![vec!["1", "2"], vec!["3"]];
        let rhs = vec!["1", "2"];
        let err = parse_fields(2, &coefficients, &rhs).unwrap_err();
        assert_eq!(field_of(err), "a[2][2]");

        let coefficients = vec![vec!["1", "2"], vec!["3", "4"]];
        let rhs = vec!["1"];
        let err = parse_fields(2, &coefficients, &rhs).unwrap_err();
        assert_eq!(field_of(err), "b[2]");
    }

    #[test]
    fn test_parse_fields_surplus() {
        let coefficients = vec![vec!["1", "2", "3"], vec!["3", "4"]];
        let rhs = vec!["1", "2"];
        let err = parse_fields(2, &coefficients, &rhs).unwrap_err();
        assert!(err.is_dimension_error());
    }
}
