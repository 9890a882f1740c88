//! Solve the textbook 3x3 system and a singular one.
//!
//! Run with `cargo run --example classic_system`.

use math_audio_gauss::{
    DEFAULT_PRECISION, LinearSystem, SolverError, format_solution, user_message,
};
use ndarray::array;

fn main() -> Result<(), SolverError> {
    let system = LinearSystem::new(
        array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]],
        array![8.0, -11.0, -3.0],
    )?;
    let x = system.solve()?;
    println!("{}", format_solution(&x, DEFAULT_PRECISION));
    println!("max residual = {:.3e}", system.max_residual(&x)?);

    let singular = LinearSystem::new(array![[1.0, 2.0], [2.0, 4.0]], array![1.0, 2.0])?;
    if let Err(e) = singular.solve() {
        println!("{}", user_message(&e));
    }

    Ok(())
}
