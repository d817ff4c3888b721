mod cli;
mod core;
mod domain;
mod infra;

use std::process;

fn main() {
    if let Err(e) = cli::commands::run() {
        println!("Error: {e}");
        process::exit(1);
    }
}
