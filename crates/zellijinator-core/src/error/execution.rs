//! Execution error types for missing or conflicting resources.

/// Execution errors represent problems with the state of stored projects.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExecutionError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
    /// Resource already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl ExecutionError {
    /// Get exit code for execution errors (always 3).
    pub const fn exit_code(&self) -> i32 {
        3
    }
}
