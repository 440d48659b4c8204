//! # RoadReady Quote Library
//!
//! Presentation shell for the lesson pricing calculator.
//!
//! ## Module Organization
//! ```text
//! roadready_quote_lib/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── pricing.rs  ◄─── Calculator inputs + derived result
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quote.rs    ◄─── One-shot quote
//! │   ├── packages.rs ◄─── Fixed package list
//! │   └── session.rs  ◄─── Interactive calculator
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! The shell never prices anything itself; every number comes from
//! `roadready_core::compute_pricing`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::CliError;
use state::ConfigState;

/// Runs the quote tool.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ROADREADY_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Dispatch Command ─────────────────────────────────────────────────► │
/// │     • quote / packages / session, output to stdout                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<(), CliError> {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(
        cli,
        |name| std::env::var(name).ok(),
        stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Loads configuration from `lookup` and dispatches the command.
///
/// Only command output is written to `out`; logs go to the subscriber.
pub fn run_with<F, R, W>(cli: Cli, lookup: F, input: R, out: &mut W) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    let config = ConfigState::from_lookup(lookup)?;
    info!(school = %config.school_name, "Configuration loaded");

    match cli.command {
        Commands::Quote(args) => {
            commands::quote::quote(&config, &args, out)?;
        }
        Commands::Packages {
            name: Some(name),
            json,
        } => {
            commands::packages::show_package(&config, &name, json, out)?;
        }
        Commands::Packages { name: None, json } => {
            commands::packages::list_packages(&config, json, out)?;
        }
        Commands::Session { strict } => {
            commands::session::run_session(&config, strict, input, out)?;
        }
    }

    out.flush()?;
    debug!("Command finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every recomputation
/// - `RUST_LOG=roadready_quote_lib=info` - Session start/end
/// - Default: WARN (only clamped-hours warnings)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::error::ErrorCode;

    fn run_args(args: &[&str], vars: &[(&str, &str)], input: &str) -> (Result<(), CliError>, String) {
        let cli = Cli::try_parse_from(std::iter::once("roadready-quote").chain(args.iter().copied()))
            .unwrap();
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let lookup = move |name: &str| {
            vars.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };

        let mut out = Vec::new();
        let result = run_with(cli, lookup, input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_bad_default_hours_is_config_error() {
        let (result, out) = run_args(&["quote"], &[("ROADREADY_DEFAULT_HOURS", "ten")], "");
        let err = result.unwrap_err();

        assert_eq!(err.code, ErrorCode::Config);
        assert!(err.to_string().starts_with("[Config] Invalid value for ROADREADY_DEFAULT_HOURS"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_strict_out_of_range_fails() {
        let (result, out) = run_args(&["quote", "--strict", "--hours", "41"], &[], "");
        let err = result.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "[ValidationError] hours must be between 1 and 40");
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_output_is_only_json() {
        let (result, out) = run_args(
            &["quote", "--hours", "20", "--theory", "--mock-test", "--json"],
            &[("ROADREADY_SCHOOL_NAME", "Fast Lane")],
            "",
        );
        result.unwrap();

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["result"]["totalPrice"], 645);
        assert_eq!(json["result"]["savings"], 30);
    }

    #[test]
    fn test_unknown_package_is_not_found() {
        let (result, out) = run_args(&["packages", "--name", "Weekend"], &[], "");
        let err = result.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(out.is_empty());
    }

    #[test]
    fn test_session_reads_from_input() {
        let (result, out) = run_args(
            &["session"],
            &[("ROADREADY_DEFAULT_HOURS", "20")],
            "theory on\nquit\n",
        );
        result.unwrap();

        assert!(out.contains("Total Price: £570\n"));
        assert!(out.contains("Total Price: £600\n"));
    }
}
