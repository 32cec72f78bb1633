//! Result alias and context helpers

use crate::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Attach human context to an error without changing its category.
pub trait ResultExt<T> {
    /// Prefix the error message with `context`.
    fn context(self, context: impl AsRef<str>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, context: impl AsRef<str>) -> Result<T> {
        self.map_err(|err| prefix(err.into(), context.as_ref()))
    }
}

fn prefix(err: Error, context: &str) -> Error {
    use crate::error::{ExecutionError, SystemError, ValidationError};

    match err {
        Error::Validation(ValidationError::InvalidConfig(msg)) => {
            Error::invalid_config(format!("{context}: {msg}"))
        }
        Error::Validation(ValidationError::ParseError(msg)) => {
            Error::parse_error(format!("{context}: {msg}"))
        }
        Error::Validation(ValidationError::ValidationError(msg)) => {
            Error::validation_error(format!("{context}: {msg}"))
        }
        Error::System(SystemError::IoError(msg)) => Error::io_error(format!("{context}: {msg}")),
        Error::System(SystemError::Command(msg)) => {
            Error::command_error(format!("{context}: {msg}"))
        }
        Error::Execution(ExecutionError::NotFound(msg)) => {
            Error::not_found(format!("{context}: {msg}"))
        }
        Error::Execution(ExecutionError::AlreadyExists(msg)) => {
            Error::already_exists(format!("{context}: {msg}"))
        }
    }
}
