use assettidy::cli::{Cli, run_cli};
use assettidy::output::Report;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(&cli) {
        Report::fatal(&e);
        process::exit(1);
    }
}
