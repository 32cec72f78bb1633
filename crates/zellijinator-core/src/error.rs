//! Error types for Zellijinator with categorization:
//!
//! - **Validation errors**: bad project files, settings or names (exit code 1)
//! - **System errors**: IO and multiplexer process failures (exit code 2)
//! - **Execution errors**: missing or duplicate resources (exit code 3)
//!
//! The layout compiler itself never produces any of these. Only the storage,
//! settings and process layers around it do.

pub mod execution;
pub mod system;
pub mod validation;

pub use execution::ExecutionError;
pub use system::SystemError;
pub use validation::ValidationError;

/// Top-level error type that can represent any error in the system.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Validation error from input or configuration
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// System error from IO or external operations
    #[error(transparent)]
    System(#[from] SystemError),
    /// Execution error from missing or conflicting resources
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

// Convenience constructors
impl Error {
    /// Create a validation error from an invalid config.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidConfig(msg.into()))
    }

    /// Create a validation error from a parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::ParseError(msg.into()))
    }

    /// Create a validation error from a validation failure.
    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::ValidationError(msg.into()))
    }

    /// Create a system error from an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::IoError(msg.into()))
    }

    /// Create a system error from a command failure.
    pub fn command_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::Command(msg.into()))
    }

    /// Create an execution error for a not found resource.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::Execution(ExecutionError::NotFound(msg.into()))
    }

    /// Create an execution error for a resource that already exists.
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::Execution(ExecutionError::AlreadyExists(msg.into()))
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: User error (validation, invalid input, bad configuration)
    /// - 2: System error (IO, external commands)
    /// - 3: Not found / already exists
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(err) => err.exit_code(),
            Self::System(err) => err.exit_code(),
            Self::Execution(err) => err.exit_code(),
        }
    }

    /// Whether this error reports a missing resource.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Execution(ExecutionError::NotFound(_)))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::parse_error(format!("Failed to parse settings: {err}"))
    }
}
