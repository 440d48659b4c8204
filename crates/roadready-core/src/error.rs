//! # Error Types
//!
//! Domain-specific error types for roadready-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  roadready-core errors (this file)                                     │
//! │  ├── CoreError        - Catalogue lookups, wrapped validation          │
//! │  └── ValidationError  - Input control failures (hours range, etc.)     │
//! │                                                                         │
//! │  quote shell errors (apps/quote-cli)                                   │
//! │  └── CliError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! `compute_pricing` never returns an error: it is total over every hour
//! count. Errors only arise at the input boundary and in catalogue lookups.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No fixed package matches the requested name.
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror what the website's range control and toggles prevent
/// before a value ever reaches the calculator.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., "maybe" for an on/off toggle).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PackageNotFound("Weekend".to_string());
        assert_eq!(err.to_string(), "Package not found: Weekend");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "hours".to_string(),
            min: 1,
            max: 40,
        };
        assert_eq!(err.to_string(), "hours must be between 1 and 40");

        let err = ValidationError::MustBePositive {
            field: "hours".to_string(),
        };
        assert_eq!(err.to_string(), "hours must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "hours".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
