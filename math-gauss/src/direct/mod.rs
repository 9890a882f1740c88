//! Direct solvers for dense linear systems
//!
//! - [`gauss_solve`]: Gaussian elimination with partial pivoting and
//!   back-substitution

mod gauss;

pub(crate) use gauss::check_dimensions;
pub use gauss::{
    DEFAULT_PIVOT_TOLERANCE, GaussConfig, UpperTriangular, eliminate, eliminate_owned,
    gauss_solve, gauss_solve_owned, gauss_solve_with,
};
