//! Validation error types for configuration and input validation.
//!
//! These errors represent user input or configuration problems that can be
//! corrected by the user.

/// Validation errors represent incorrect user input or configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Parse error when reading a project file or settings
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ValidationError {
    /// Get exit code for validation errors (always 1).
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
