//! Transport-facing classification of engine errors.
//!
//! The engine itself never speaks HTTP. Adapters exposing the REST surface
//! (`PUT {id}/left`, `PUT {id}/right`, `GET {id}`) translate error kinds
//! through this single mapping table, so the mapping lives in exactly one
//! place and the engine stays free of transport vocabulary.

use crate::error::EngineError;

impl EngineError {
    /// Stable error code for external API responses.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidIdentifier => "ERR_INVALID_ID",
            EngineError::InvalidEncoding => "ERR_INVALID_ENCODING",
            EngineError::NotComparable(_) => "ERR_NOT_COMPARABLE",
            EngineError::Comparison(_) => "ERR_COMPARISON",
            EngineError::Store(_) => "ERR_STORE",
        }
    }

    /// HTTP status an adapter should report for this error.
    ///
    /// Invalid caller input maps to 400, a missing or partial record to
    /// 404, internal failures to 500.
    pub fn http_status(&self) -> u16 {
        match self {
            EngineError::InvalidIdentifier | EngineError::InvalidEncoding => 400,
            EngineError::NotComparable(_) => 404,
            EngineError::Comparison(_) | EngineError::Store(_) => 500,
        }
    }
}
