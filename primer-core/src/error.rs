//! Structured errors
//!
//! Errors carry a machine-readable code alongside the human-readable
//! message so callers (and tests) can dispatch on the condition rather
//! than string-matching messages.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const EMPTY_VALUE: &str = "EMPTY_VALUE";
    pub const INPUT_CANCELLED: &str = "INPUT_CANCELLED";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recovered locally with a fallback value
    Warning,
    /// Current operation failed
    Error,
    /// Program cannot continue
    Fatal,
}

/// Structured error value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimerError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl PrimerError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_ARGUMENT, format!("Invalid argument: {}", details.into()))
    }

    pub fn type_error(expected: &str, got: &str) -> Self {
        Self::new(codes::TYPE_ERROR, format!("Expected {}, got {}", expected, got))
            .with_suggestion(format!("Provide a {} value", expected))
    }

    pub fn empty_value(what: &str) -> Self {
        Self::new(codes::EMPTY_VALUE, format!("{} cannot be empty or whitespace only", what))
            .with_suggestion("Provide a non-blank value")
    }

    pub fn input_cancelled() -> Self {
        Self::new(codes::INPUT_CANCELLED, "Input cancelled")
            .with_severity(Severity::Warning)
    }

    pub fn overflow(details: impl Into<String>) -> Self {
        Self::new(codes::OVERFLOW, format!("Overflow: {}", details.into()))
            .with_suggestion("Request fewer terms")
    }

    pub fn io_error(details: impl Into<String>) -> Self {
        Self::new(codes::IO_ERROR, format!("I/O error: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for PrimerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for PrimerError {}
