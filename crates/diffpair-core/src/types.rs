//! Strong type definitions for diffpair.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque record identifier, unique within a store.
///
/// Construction goes through [`RecordId::parse`], which rejects blank
/// input, so a `RecordId` held anywhere in the system is known to be
/// non-empty. The identifier is otherwise uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Parse an identifier, rejecting empty or whitespace-only input.
    ///
    /// The identifier is stored as given; surrounding whitespace is not
    /// stripped, only used for the blankness check.
    pub fn parse(id: &str) -> Option<Self> {
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// One of the two independently-submitted payloads of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
