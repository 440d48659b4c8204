//! # Validation Module
//!
//! Input checks for the values the calculator widget collects.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input control                                                │
//! │  ├── Range slider bounded 1..=40        → clamp_hours()                │
//! │  └── Typed value (CLI / strict mode)    → validate_hours()             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculator (pricing.rs)                                      │
//! │  └── Accepts ANY u32, never rejects                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roadready_core::validation::{clamp_hours, validate_hours};
//!
//! assert_eq!(validate_hours(12).unwrap(), 12);
//! assert!(validate_hours(0).is_err());
//! assert_eq!(clamp_hours(55), 40);
//! ```

use crate::error::ValidationError;
use crate::{MAX_LESSON_HOURS, MIN_LESSON_HOURS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an hour count typed by the user.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LESSON_HOURS (40)
///
/// ## Returns
/// The hour count narrowed to `u32`, ready for [`crate::PricingInput`].
pub fn validate_hours(hours: i64) -> ValidationResult<u32> {
    if hours <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "hours".to_string(),
        });
    }

    if hours > MAX_LESSON_HOURS as i64 {
        return Err(ValidationError::OutOfRange {
            field: "hours".to_string(),
            min: MIN_LESSON_HOURS as i64,
            max: MAX_LESSON_HOURS as i64,
        });
    }

    Ok(hours as u32)
}

/// Clamps an hour count into the slider range, like dragging past either end.
pub fn clamp_hours(hours: i64) -> u32 {
    hours.clamp(MIN_LESSON_HOURS as i64, MAX_LESSON_HOURS as i64) as u32
}

// =============================================================================
// Toggle Validators
// =============================================================================

/// Parses a checkbox value: `on`/`off`, `yes`/`no`, `true`/`false`, `1`/`0`.
///
/// ## Example
/// ```rust
/// use roadready_core::validation::parse_toggle;
///
/// assert!(parse_toggle("theory", "ON").unwrap());
/// assert!(!parse_toggle("theory", "no").unwrap());
/// assert!(parse_toggle("theory", "maybe").is_err());
/// ```
pub fn parse_toggle(field: &str, value: &str) -> ValidationResult<bool> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    match value.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected on or off".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
