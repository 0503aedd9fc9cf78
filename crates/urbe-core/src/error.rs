//! Error types and exit codes for urbe
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing city/vertex, duplicate id, invalid data file)

use crate::city::CityId;
use thiserror::Error;

/// Exit codes reported by the urbe binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing city/vertex, duplicate id (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during urbe operations
#[derive(Error, Debug)]
pub enum UrbeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("city not found: {id}")]
    CityNotFound { id: CityId },

    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("invalid data file: {reason}")]
    InvalidStore { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl UrbeError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        UrbeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        UrbeError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph vertex that was not found
    pub fn vertex_not_found(label: impl Into<String>) -> Self {
        UrbeError::VertexNotFound {
            label: label.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            UrbeError::UnknownFormat(_)
            | UrbeError::UsageError(_)
            | UrbeError::InvalidValue { .. } => ExitCode::Usage,

            UrbeError::CityNotFound { .. }
            | UrbeError::VertexNotFound { .. }
            | UrbeError::AlreadyExists { .. }
            | UrbeError::InvalidStore { .. } => ExitCode::Data,

            UrbeError::Io(_) | UrbeError::Json(_) | UrbeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON envelopes
    fn error_type(&self) -> &'static str {
        match self {
            UrbeError::UnknownFormat(_) => "unknown_format",
            UrbeError::UsageError(_) => "usage_error",
            UrbeError::InvalidValue { .. } => "invalid_value",
            UrbeError::CityNotFound { .. } => "city_not_found",
            UrbeError::VertexNotFound { .. } => "vertex_not_found",
            UrbeError::AlreadyExists { .. } => "already_exists",
            UrbeError::InvalidStore { .. } => "invalid_store",
            UrbeError::Io(_) => "io_error",
            UrbeError::Json(_) => "json_error",
            UrbeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for urbe operations
pub type Result<T> = std::result::Result<T, UrbeError>;
