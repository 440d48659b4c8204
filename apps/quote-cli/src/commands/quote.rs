//! # Quote Command
//!
//! One-shot price for a custom lesson package.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  roadready-quote quote --hours 20 --theory --mock-test                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Resolve hours (default / clamp / strict validation)        │    │
//! │  │  2. Build PricingState (computes immediately)                  │    │
//! │  │  3. Render summary or JSON                                     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Total Price: £645                                                      │
//! │  You Save: £30                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use tracing::{debug, warn};

use roadready_core::validation::{clamp_hours, validate_hours};
use roadready_core::{AddOn, PricingInput};

use crate::cli::QuoteArgs;
use crate::error::CliError;
use crate::state::{ConfigState, PricingState};

/// Prices the requested package and writes the result to `out`.
pub fn quote<W: Write>(
    config: &ConfigState,
    args: &QuoteArgs,
    out: &mut W,
) -> Result<PricingState, CliError> {
    debug!(?args, "quote command");

    let hours = resolve_hours(config, args.hours, args.strict)?;
    let state = PricingState::from_input(
        PricingInput::new(hours)
            .with_theory_support(args.theory)
            .with_mock_test(args.mock_test),
    );

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    } else {
        write!(out, "{}", render_summary(config, &state))?;
    }

    Ok(state)
}

/// Turns the requested hours into a slider position.
///
/// ## Behavior
/// - Not given: the configured default
/// - Strict: out-of-range values are a validation error
/// - Otherwise: clamped into 1..=40, like dragging past the slider's end
pub fn resolve_hours(
    config: &ConfigState,
    requested: Option<i64>,
    strict: bool,
) -> Result<u32, CliError> {
    let Some(requested) = requested else {
        return Ok(config.default_hours);
    };

    if strict {
        return Ok(validate_hours(requested)?);
    }

    let hours = clamp_hours(requested);
    if hours as i64 != requested {
        warn!(requested, clamped = hours, "hours outside slider range, clamped");
    }
    Ok(hours)
}

/// Renders the calculator panel as text.
///
/// "You Save" only appears when there is something saved.
pub fn render_summary(config: &ConfigState, state: &PricingState) -> String {
    let input = state.input();
    let result = state.result();

    let add_ons = input
        .add_ons()
        .iter()
        .map(|add_on| format_add_on(config, *add_on))
        .collect::<Vec<_>>();
    let add_ons = if add_ons.is_empty() {
        "none".to_string()
    } else {
        add_ons.join(", ")
    };

    let mut summary = String::new();
    summary.push_str(&format!("{}: Custom Lesson Package\n", config.school_name));
    summary.push_str(&format!("Hours:       {}\n", input.hours));
    summary.push_str(&format!("Add-ons:     {}\n", add_ons));
    summary.push_str(&format!("Discount:    {}\n", state.tier().description()));
    summary.push_str(&format!(
        "Total Price: {}\n",
        config.format_currency(result.total_price)
    ));
    if result.has_savings() {
        summary.push_str(&format!(
            "You Save:    {}\n",
            config.format_currency(result.savings)
        ));
    }
    summary
}

fn format_add_on(config: &ConfigState, add_on: AddOn) -> String {
    format!(
        "{} (+{})",
        add_on.label(),
        config.format_currency(add_on.price().round_half_up())
    )
}
