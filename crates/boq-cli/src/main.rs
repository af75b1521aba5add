//! BOQ Estimator - construction material cost estimation from floor plans
//!
//! A CLI tool that turns predicted building attributes into a bill of
//! quantities with per-material costs.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        if e.is_retryable() {
            eprintln!("Check the prediction service and try again.");
        }
        std::process::exit(1);
    }
}
