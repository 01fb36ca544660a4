//! Classification of two complete record sides.
//!
//! The comparison order is fixed: equality first, then size, then content.
//! Size is checked before any byte-level work because the offset differ
//! requires equal lengths.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::offsets::diff_offsets;

/// How two complete sides relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKind {
    /// Both sides are byte-for-byte identical.
    Equal,
    /// The sides have different lengths; no byte-level diff is attempted.
    SizeMismatch,
    /// Same length, at least one differing byte.
    ContentMismatch,
}

/// The immutable outcome of comparing two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    kind: ComparisonKind,
    detail: String,
}

impl ComparisonResult {
    /// Classify two non-empty sides.
    ///
    /// For [`ComparisonKind::ContentMismatch`] the detail embeds the offset
    /// differ's range list.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidInput`] if either side is empty. Callers enforce
    /// non-emptiness before classifying.
    pub fn classify(left: &[u8], right: &[u8]) -> Result<Self> {
        if left.is_empty() || right.is_empty() {
            return Err(CoreError::InvalidInput("buffers must be non-empty"));
        }

        if left == right {
            return Ok(Self {
                kind: ComparisonKind::Equal,
                detail: "sides are byte-for-byte identical".to_string(),
            });
        }

        if left.len() != right.len() {
            return Ok(Self {
                kind: ComparisonKind::SizeMismatch,
                detail: format!(
                    "sides differ in size: left is {} bytes, right is {} bytes",
                    left.len(),
                    right.len()
                ),
            });
        }

        let summary = diff_offsets(left, right)?;
        Ok(Self {
            kind: ComparisonKind::ContentMismatch,
            detail: format!("sides have equal size but differing content: {summary}"),
        })
    }

    /// Rebuild a result from stored parts. Used by storage hydration.
    pub fn from_parts(kind: ComparisonKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// The classification.
    pub fn kind(&self) -> ComparisonKind {
        self.kind
    }

    /// Human-readable description of the outcome.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sides_are_equal() {
        let result = ComparisonResult::classify(b"test", b"test").unwrap();
        assert_eq!(result.kind(), ComparisonKind::Equal);
    }

    #[test]
    fn different_lengths_are_a_size_mismatch() {
        let result = ComparisonResult::classify(b"leftContent", b"rightContent").unwrap();
        assert_eq!(result.kind(), ComparisonKind::SizeMismatch);
        assert!(result.detail().contains("11 bytes"));
        assert!(result.detail().contains("12 bytes"));
    }

    #[test]
    fn equal_length_differing_content_reports_ranges() {
        let result =
            ComparisonResult::classify(b"rightSAMEPARTright", b"lleftSAMEPARTlleft").unwrap();
        assert_eq!(result.kind(), ComparisonKind::ContentMismatch);
        assert!(result.detail().contains("(0, 4)"));
        assert!(result.detail().contains("(13, 4)"));
    }

    #[test]
    fn empty_sides_are_rejected() {
        assert!(matches!(
            ComparisonResult::classify(b"", b"x"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            ComparisonResult::classify(b"x", b""),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            ComparisonResult::classify(b"", b""),
            Err(CoreError::InvalidInput(_))
        ));
    }
}
