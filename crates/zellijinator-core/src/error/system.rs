//! System error types for IO and multiplexer commands.
//!
//! These errors represent failures in system operations that are typically
//! out of the user's direct control.

/// System errors represent failures in IO or external commands.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SystemError {
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// External command execution failed
    #[error("Command error: {0}")]
    Command(String),
}

impl SystemError {
    /// Get exit code for system errors (always 2).
    pub const fn exit_code(&self) -> i32 {
        2
    }
}
