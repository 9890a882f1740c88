use clap::Parser;
use math_audio_gauss::cli::{Cli, run};
use std::process;

fn main() {
    env_logger::init();
    let args = Cli::parse();

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(failure) => {
            eprintln!("Error: {}", failure.message);
            process::exit(failure.code);
        }
    }
}
