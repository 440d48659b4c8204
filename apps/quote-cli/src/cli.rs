//! # Command Line
//!
//! clap definitions for the `roadready-quote` binary. Parsing only; every
//! subcommand is dispatched from `lib.rs`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "roadready-quote",
    version,
    about = "Quote custom driving lesson packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a custom package of lesson hours
    Quote(QuoteArgs),

    /// List the fixed-price lesson packages
    Packages {
        /// Show a single package by name (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Interactive calculator: adjust hours and add-ons line by line
    Session {
        /// Reject out-of-range hours instead of clamping them
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Lesson hours (1-40). Defaults to ROADREADY_DEFAULT_HOURS or 10
    #[arg(long, allow_negative_numbers = true)]
    pub hours: Option<i64>,

    /// Include theory test support (+£30)
    #[arg(short, long)]
    pub theory: bool,

    /// Include a mock driving test (+£45)
    #[arg(short, long)]
    pub mock_test: bool,

    /// Reject out-of-range hours instead of clamping them
    #[arg(long)]
    pub strict: bool,

    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}
