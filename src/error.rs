//! Error types shared by the core services and the HTTP layer.

use thiserror::Error;

/// Errors produced by the time service core and its request handlers.
///
/// Every variant is recoverable at the request boundary and renders as an
/// HTTP 400 with a descriptive body; the core never terminates the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("Missing '{0}' parameter")]
    MissingParameter(&'static str),

    #[error("Invalid request body")]
    MalformedRequestBody,

    #[error("Invalid request")]
    UnroutedRequest,
}

/// Result type for the time service core
pub type Result<T> = std::result::Result<T, TimeError>;
