//! Error types for the core primitives.

use thiserror::Error;

/// Errors from the pure comparison primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A differ precondition was violated. Callers must pass two non-empty
    /// buffers of equal length; failing to do so is a programming error,
    /// not bad user input.
    #[error("invalid diff input: {0}")]
    InvalidInput(&'static str),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
