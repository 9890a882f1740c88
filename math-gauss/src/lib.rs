//! Dense linear system solver
//!
//! This crate solves square systems Ax = b by Gaussian elimination with
//! partial pivoting followed by back-substitution.
//!
//! # Features
//!
//! - **Solver**: [`gauss_solve`] with an absolute, configurable pivot tolerance
//!   (default `1e-12`); singular systems are reported as
//!   [`SolverError::SingularMatrix`]
//! - **Requests**: [`LinearSystem`] validates dimensions and finiteness once
//! - **Input**: parsing of textual form fields with per-field errors
//! - **Output**: `x1 = 2.0000` style rendering and user-facing messages
//! - **Files**: JSON/TOML system descriptions
//! - **CLI**: the `gauss_solve` front end, in [`cli`]
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! Caller data is never mutated: borrowed inputs are copied before
//! elimination.
//!
//! # Example
//!
//! ```
//! use math_audio_gauss::{gauss_solve, SolverError};
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
//! let b = array![8.0, -11.0, -3.0];
//! let x = gauss_solve(&a, &b)?;
//! assert!((x[0] - 2.0).abs() < 1e-10);
//! # Ok::<(), SolverError>(())
//! ```

pub mod cli;
pub mod direct;
pub mod error;
pub mod input;
pub mod io;
pub mod report;
pub mod system;
pub mod traits;

// Re-export main types
pub use error::{Result, SolverError};
pub use system::LinearSystem;
pub use traits::RealField;

// Re-export the solver
pub use direct::{
    DEFAULT_PIVOT_TOLERANCE, GaussConfig, UpperTriangular, eliminate, eliminate_owned,
    gauss_solve, gauss_solve_owned, gauss_solve_with,
};

// Re-export input/output helpers
pub use input::{parse_field, parse_fields, parse_row, parse_size, split_fields};
pub use io::{
    ConfigFormat, SystemFile, SystemFileError, load_system, parse_system, save_system,
    serialize_system,
};
pub use report::{DEFAULT_PRECISION, format_solution, user_message};
