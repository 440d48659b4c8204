//! # RoadReady Quote Entry Point
//!
//! ```text
//! roadready-quote quote --hours 20 --theory --mock-test
//! roadready-quote packages --json
//! roadready-quote packages --name intensive
//! roadready-quote session
//! ```
//!
//! Errors are printed to stderr and the process exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use roadready_quote_lib::cli::Cli;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match roadready_quote_lib::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
