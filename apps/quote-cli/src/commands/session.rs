//! # Session Command
//!
//! Line-oriented stand-in for the website's calculator widget. Each line is
//! one input event; every event recomputes the price before the next line
//! is read.
//!
//! ## Commands
//! ```text
//! hours <n>              move the slider
//! theory on|off          set the theory support checkbox
//! mock on|off            set the mock test checkbox
//! toggle theory|mock     flip a checkbox
//! show                   print the current summary
//! help                   list commands
//! quit | exit            leave the session (EOF works too)
//! ```
//!
//! A bad line prints an error and the session carries on.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use roadready_core::validation::parse_toggle;
use roadready_core::AddOn;

use crate::commands::quote::{render_summary, resolve_hours};
use crate::error::{CliError, ErrorCode};
use crate::state::{ConfigState, PricingState};

const HELP: &str = "\
Commands:
  hours <n>            set lesson hours (1-40)
  theory on|off        theory test support (+£30)
  mock on|off          mock driving test (+£45)
  toggle theory|mock   flip an add-on
  show                 show the current price
  help                 list these commands
  quit | exit          leave the session
";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Hours(i64),
    Set(AddOn, bool),
    Toggle(AddOn),
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses a line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(CliError::invalid_command(format!(
                "unexpected argument: {}",
                extra
            )));
        }

        let parsed = match (command.to_ascii_lowercase().as_str(), argument) {
            ("hours", Some(value)) => {
                let hours = value.parse::<i64>().map_err(|_| {
                    CliError::validation(format!("hours must be a whole number, got {:?}", value))
                })?;
                SessionCommand::Hours(hours)
            }
            ("toggle", Some(name)) => SessionCommand::Toggle(parse_add_on(name)?),
            ("show", None) => SessionCommand::Show,
            ("help", None) => SessionCommand::Help,
            ("quit" | "exit", None) => SessionCommand::Quit,
            (name, Some(value)) if is_add_on_name(name) => {
                let add_on = parse_add_on(name)?;
                SessionCommand::Set(add_on, parse_toggle(name, value)?)
            }
            (name, None) if matches!(name, "hours" | "toggle") || is_add_on_name(name) => {
                return Err(CliError::invalid_command(format!(
                    "{} needs a value, try 'help'",
                    name
                )));
            }
            (name, _) => {
                return Err(CliError::invalid_command(format!(
                    "unknown command: {}, try 'help'",
                    name
                )));
            }
        };

        Ok(Some(parsed))
    }
}

fn is_add_on_name(name: &str) -> bool {
    parse_add_on(name).is_ok()
}

fn parse_add_on(name: &str) -> Result<AddOn, CliError> {
    match name.to_ascii_lowercase().as_str() {
        "theory" | "theory-support" => Ok(AddOn::TheorySupport),
        "mock" | "mock-test" => Ok(AddOn::MockTest),
        other => Err(CliError::invalid_command(format!(
            "unknown add-on: {}, expected theory or mock",
            other
        ))),
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// ## Returns
/// The final calculator state.
pub fn run_session<R: BufRead, W: Write>(
    config: &ConfigState,
    strict: bool,
    mut input: R,
    out: &mut W,
) -> Result<PricingState, CliError> {
    info!(strict, "session started");

    let mut state = PricingState::new(config.default_hours);
    writeln!(out, "Type 'help' for commands.")?;
    write!(out, "{}", render_summary(config, &state))?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "session line is not valid UTF-8");
            writeln!(out, "error: input is not valid UTF-8, line ignored")?;
            continue;
        };
        let command = match SessionCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {}", err.message)?;
                continue;
            }
        };
        debug!(?command, "session command");

        match apply(config, strict, &mut state, command) {
            Ok(Step::Continue) => write!(out, "{}", render_summary(config, &state))?,
            Ok(Step::Help) => write!(out, "{}", HELP)?,
            Ok(Step::Quit) => break,
            Err(err) if err.code == ErrorCode::ValidationError => {
                writeln!(out, "error: {}", err.message)?;
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        hours = state.input().hours,
        total = state.result().total_price,
        "session ended"
    );
    Ok(state)
}

enum Step {
    Continue,
    Help,
    Quit,
}

fn apply(
    config: &ConfigState,
    strict: bool,
    state: &mut PricingState,
    command: SessionCommand,
) -> Result<Step, CliError> {
    match command {
        SessionCommand::Hours(hours) => {
            let hours = resolve_hours(config, Some(hours), strict)?;
            state.set_hours(hours);
        }
        SessionCommand::Set(add_on, include) => {
            state.set_add_on(add_on, include);
        }
        SessionCommand::Toggle(add_on) => {
            state.toggle(add_on);
        }
        SessionCommand::Show => {}
        SessionCommand::Help => return Ok(Step::Help),
        SessionCommand::Quit => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}
