//! Command-line front end for `gauss_solve`
//!
//! The binary only parses arguments and maps [`CliFailure`] to an exit code;
//! everything else lives here so it can be tested. Input problems exit with
//! [`EXIT_INPUT_ERROR`], singular systems with [`EXIT_SOLVE_ERROR`].

use crate::direct::GaussConfig;
use crate::error::SolverError;
use crate::input::{parse_fields, parse_size, split_fields};
use crate::io::load_system;
use crate::report::{DEFAULT_PRECISION, format_solution, user_message};
use crate::system::LinearSystem;
use clap::Parser;
use std::path::PathBuf;

/// Exit code for unreadable or malformed input
pub const EXIT_INPUT_ERROR: i32 = 2;
/// Exit code for a system without a unique solution
pub const EXIT_SOLVE_ERROR: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "gauss_solve",
    about = "Solve a square linear system Ax = b by Gaussian elimination with partial pivoting"
)]
pub struct Cli {
    /// JSON or TOML file describing the system (coefficients, rhs, solver, precision)
    #[arg(long, conflicts_with_all = ["size", "row", "rhs"])]
    pub input: Option<PathBuf>,

    /// Number of equations/unknowns when entering the system inline
    #[arg(long)]
    pub size: Option<String>,

    /// One equation's coefficients, separated by commas or spaces (repeat once per equation)
    #[arg(long, allow_hyphen_values = true)]
    pub row: Vec<String>,

    /// Independent terms, separated by commas or spaces
    #[arg(long, allow_hyphen_values = true)]
    pub rhs: Option<String>,

    /// Decimals printed for each unknown (defaults to the file setting, or 4)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Absolute pivot tolerance below which the system is reported as singular (must be > 0)
    #[arg(long, allow_negative_numbers = true)]
    pub tolerance: Option<f64>,

    /// Print the largest residual |Ax - b| after solving
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Log every row exchange (use RUST_LOG=info to see them)
    #[arg(long, default_value_t = false)]
    pub log_pivots: bool,
}

/// A failed run: the process exit code and the message for stderr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliFailure {
    /// Process exit code
    pub code: i32,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliFailure {
    fn input(message: impl Into<String>) -> Self {
        Self {
            code: EXIT_INPUT_ERROR,
            message: message.into(),
        }
    }

    /// Input-side solver errors exit with 2, singular systems with 1.
    fn from_solver(err: &SolverError) -> Self {
        let code = if err.is_singular() {
            EXIT_SOLVE_ERROR
        } else {
            EXIT_INPUT_ERROR
        };
        Self {
            code,
            message: user_message(err),
        }
    }
}

/// A system ready to solve, with its settings
#[derive(Debug, Clone)]
pub struct Request {
    /// The validated system
    pub system: LinearSystem<f64>,
    /// Solver settings after command-line overrides
    pub config: GaussConfig,
    /// Decimals used in the output
    pub precision: usize,
}

fn inline_request(args: &Cli) -> Result<Request, SolverError> {
    let size = parse_size(args.size.as_deref().unwrap_or(""))?;

    let coefficients: Vec<Vec<&str>> = args.row.iter().map(|row| split_fields(row)).collect();
    let rhs = args.rhs.as_deref().map(split_fields).unwrap_or_default();

    Ok(Request {
        system: parse_fields(size, &coefficients, &rhs)?,
        config: GaussConfig::default(),
        precision: DEFAULT_PRECISION,
    })
}

/// Build the request from a file or inline fields, then apply overrides.
pub fn build_request(args: &Cli) -> Result<Request, CliFailure> {
    let mut request = match &args.input {
        Some(path) => {
            let file = load_system(path).map_err(|e| {
                CliFailure::input(format!("failed to load '{}': {}", path.display(), e))
            })?;
            let system = file.to_system().map_err(|e| CliFailure::from_solver(&e))?;
            Request {
                system,
                config: file.solver,
                precision: file.precision,
            }
        }
        None => inline_request(args).map_err(|e| CliFailure::from_solver(&e))?,
    };

    if let Some(tolerance) = args.tolerance {
        request.config = request.config.with_pivot_tolerance(tolerance);
    }
    if args.log_pivots {
        request.config = request.config.with_log_pivots(true);
    }
    if let Some(precision) = args.precision {
        request.precision = precision;
    }

    request
        .config
        .validate()
        .map_err(|e| CliFailure::input(format!("--tolerance: {}", e)))?;
    Ok(request)
}

/// Run the whole command and return what goes to stdout.
pub fn run(args: &Cli) -> Result<String, CliFailure> {
    let request = build_request(args)?;
    let n = request.system.dim();
    log::info!(
        "Solving {}x{} system (pivot tolerance {:.1e})",
        n,
        n,
        request.config.pivot_tolerance
    );

    let x = request.system.solve_with(&request.config).map_err(|e| {
        log::debug!("Solve failed: {}", e);
        CliFailure::from_solver(&e)
    })?;

    let mut output = format_solution(&x, request.precision);
    if args.check {
        let residual = request
            .system
            .max_residual(&x)
            .map_err(|e| CliFailure::from_solver(&e))?;
        output.push_str(&format!("\nmax residual = {:.3e}", residual));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gauss_solve").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_inline_system_output() {
        let args = cli(&[
            "--size", "3", "--row", "2 1 -1", "--row", "-3,-1,2", "--row", "-2 1 2", "--rhs",
            "8 -11 -3",
        ]);
        assert_eq!(
            run(&args).expect("valid system"),
            "x1 = 2.0000\nx2 = 3.0000\nx3 = -1.0000"
        );
    }

    #[test]
    fn test_precision_and_check() {
        let args = cli(&[
            "--size", "1", "--row", "3", "--rhs", "1", "--precision", "2", "--check",
        ]);
        let output = run(&args).expect("valid system");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("x1 = 0.33"));
        assert!(lines.next().expect("residual line").starts_with("max residual = "));
    }

    #[test]
    fn test_non_numeric_row_is_input_error() {
        let args = cli(&["--size", "2", "--row", "1 x", "--row", "3 4", "--rhs", "1 2"]);
        let failure = run(&args).unwrap_err();
        assert_eq!(failure.code, EXIT_INPUT_ERROR);
        assert!(failure.message.contains("a[1][2]"));
    }

    #[test]
    fn test_missing_size_is_input_error() {
        let args = cli(&["--row", "1 2", "--row", "3 4", "--rhs", "1 2"]);
        let failure = run(&args).unwrap_err();
        assert_eq!(failure.code, EXIT_INPUT_ERROR);
        assert!(failure.message.contains("size"));
    }

    #[test]
    fn test_missing_rhs_is_input_error() {
        let args = cli(&["--size", "2", "--row", "1 2", "--row", "3 4"]);
        assert_eq!(run(&args).unwrap_err().code, EXIT_INPUT_ERROR);
    }

    #[test]
    fn test_singular_system_is_solve_error() {
        let args = cli(&["--size", "2", "--row", "1 2", "--row", "2 4", "--rhs", "1 2"]);
        let failure = run(&args).unwrap_err();
        assert_eq!(failure.code, EXIT_SOLVE_ERROR);
        assert!(failure.message.contains("no unique solution"));
    }

    #[test]
    fn test_invalid_tolerance_is_input_error() {
        for tolerance in ["0", "-1", "NaN"] {
            let args = cli(&[
                "--size",
                "2",
                "--row",
                "1 1",
                "--row",
                "1 1",
                "--rhs",
                "1 2",
                "--tolerance",
                tolerance,
            ]);
            let failure = run(&args).unwrap_err();
            assert_eq!(failure.code, EXIT_INPUT_ERROR, "tolerance {}", tolerance);
        }
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let path = std::env::temp_dir().join("math-gauss-cli-absent-system.json");
        let args = cli(&["--input", path.to_str().expect("utf-8 path")]);
        let failure = run(&args).unwrap_err();
        assert_eq!(failure.code, EXIT_INPUT_ERROR);
        assert!(failure.message.starts_with("failed to load"));
    }
}
