//! Error types for the comparison engine.

use diffpair_core::CoreError;
use diffpair_store::StoreError;
use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// All are terminal to the triggering call: the engine never retries and
/// never falls back to a default. A transport adapter maps these kinds to
/// protocol responses through the table in [`crate::transport`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller supplied an empty or blank record id.
    #[error("record id must be non-empty")]
    InvalidIdentifier,

    /// Submitted content was blank or not a valid base64 document.
    #[error("content is not a valid base64 document")]
    InvalidEncoding,

    /// The record is missing, or has fewer than two non-empty sides.
    #[error("record {0} is absent or only partially submitted")]
    NotComparable(String),

    /// A comparison precondition was violated.
    #[error("comparison rejected: {0}")]
    Comparison(#[from] CoreError),

    /// Storage failure, propagated unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
