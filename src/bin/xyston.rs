//! Xyston CLI binary.

use clap::Parser;
use std::process;
use xyston::cli::{args::XystonArgs, commands::execute_command};

fn main() {
    let args = XystonArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
