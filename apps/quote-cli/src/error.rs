//! # CLI Error Type
//!
//! Unified error type for quote commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Quote Tool                         │
//! │                                                                         │
//! │  Command Function ── Result<T, CliError>                                │
//! │         │                                                               │
//! │         ├── Bad hours / toggle? ── ValidationError ──┐                  │
//! │         ├── Unknown package?    ── CoreError ────────┤                  │
//! │         ├── Bad environment?    ── ConfigError ──────┼──► CliError      │
//! │         └── stdout closed?      ── io::Error ────────┘        │         │
//! │                                                               ▼         │
//! │                                    main: "error: [Code] message", exit 1│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing calculation itself never produces an error.

use serde::Serialize;
use roadready_core::{CoreError, ValidationError};

use crate::state::ConfigError;

/// Error returned from quote commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "hours must be between 1 and 40"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Requested package does not exist
    NotFound,

    /// Unrecognised session command
    InvalidCommand,

    /// Reading input or writing output failed
    Io,

    /// Configuration could not be loaded
    Config,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PackageNotFound(name) => {
                CliError::new(ErrorCode::NotFound, format!("Package not found: {}", name))
            }
            CoreError::Validation(e) => CliError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::Config, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        CliError::internal("Failed to serialize output")
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
