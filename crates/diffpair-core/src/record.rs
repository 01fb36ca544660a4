//! The record: two optional sides plus an optional cached comparison result.
//!
//! Rather than a struct of nullable fields with implicit invariants, the
//! record carries an explicit state machine, so a cached result can only
//! exist alongside two sides:
//!
//! ```text
//! (absent) -> Partial -> CompleteNoResult -> CompleteWithResult
//! ```
//!
//! Submitting new content for a side of a complete record drops the cached
//! result (back to `CompleteNoResult`). Sides are never withdrawn: once a
//! record is complete it stays complete, only side content can be replaced.
//! The absent state has no variant here; a missing record is simply absent
//! from the store.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::compare::ComparisonResult;
use crate::types::{RecordId, Side};

/// Stored state for one record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    state: RecordState,
}

/// The record state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecordState {
    /// Only one side has been submitted so far.
    Partial { side: Side, content: Bytes },
    /// Both sides are present; no comparison has been computed since the
    /// last content change.
    CompleteNoResult { left: Bytes, right: Bytes },
    /// Both sides are present and the cached result matches them.
    CompleteWithResult {
        left: Bytes,
        right: Bytes,
        result: ComparisonResult,
    },
}

impl Record {
    /// Create a fresh record from the first submission of a side.
    pub fn with_side(id: RecordId, side: Side, content: Bytes) -> Self {
        Self {
            id,
            state: RecordState::Partial { side, content },
        }
    }

    /// Rebuild a record from stored parts. Used by storage hydration.
    pub fn from_state(id: RecordId, state: RecordState) -> Self {
        Self { id, state }
    }

    /// The record identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// The current state.
    pub fn state(&self) -> &RecordState {
        &self.state
    }

    /// The stored content of one side, if present.
    pub fn side(&self, side: Side) -> Option<&Bytes> {
        match &self.state {
            RecordState::Partial {
                side: stored,
                content,
            } => (*stored == side).then_some(content),
            RecordState::CompleteNoResult { left, right }
            | RecordState::CompleteWithResult { left, right, .. } => match side {
                Side::Left => Some(left),
                Side::Right => Some(right),
            },
        }
    }

    /// Both sides, when the record is complete.
    pub fn sides(&self) -> Option<(&Bytes, &Bytes)> {
        match &self.state {
            RecordState::Partial { .. } => None,
            RecordState::CompleteNoResult { left, right }
            | RecordState::CompleteWithResult { left, right, .. } => Some((left, right)),
        }
    }

    /// The cached comparison result, if one is attached.
    pub fn result(&self) -> Option<&ComparisonResult> {
        match &self.state {
            RecordState::CompleteWithResult { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The successor record after submitting `content` for `side`.
    ///
    /// Any cached result is dropped; the other side, if present, is
    /// untouched. This always produces the post-submission state - the
    /// caller decides whether an unchanged submission warrants a write.
    pub fn submit(self, side: Side, content: Bytes) -> Self {
        let state = match self.state {
            RecordState::Partial {
                side: stored,
                content: existing,
            } if stored != side => {
                let (left, right) = match side {
                    Side::Left => (content, existing),
                    Side::Right => (existing, content),
                };
                RecordState::CompleteNoResult { left, right }
            }
            RecordState::Partial { .. } => RecordState::Partial { side, content },
            RecordState::CompleteNoResult { left, right }
            | RecordState::CompleteWithResult { left, right, .. } => match side {
                Side::Left => RecordState::CompleteNoResult {
                    left: content,
                    right,
                },
                Side::Right => RecordState::CompleteNoResult {
                    left,
                    right: content,
                },
            },
        };
        Self {
            id: self.id,
            state,
        }
    }

    /// Attach a computed result to a complete record.
    ///
    /// A partial record is returned unchanged: a result can never exist
    /// without both sides.
    pub fn with_result(self, result: ComparisonResult) -> Self {
        let state = match self.state {
            RecordState::Partial { .. } => return self,
            RecordState::CompleteNoResult { left, right }
            | RecordState::CompleteWithResult { left, right, .. } => {
                RecordState::CompleteWithResult {
                    left,
                    right,
                    result,
                }
            }
        };
        Self {
            id: self.id,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonKind;

    fn id(s: &str) -> RecordId {
        RecordId::parse(s).unwrap()
    }

    fn equal_result() -> ComparisonResult {
        ComparisonResult::from_parts(ComparisonKind::Equal, "equal")
    }

    #[test]
    fn first_submission_is_partial() {
        let record = Record::with_side(id("a"), Side::Left, Bytes::from_static(b"x"));
        assert_eq!(record.side(Side::Left).unwrap(), &Bytes::from_static(b"x"));
        assert!(record.side(Side::Right).is_none());
        assert!(record.sides().is_none());
        assert!(record.result().is_none());
    }

    #[test]
    fn second_side_completes_the_record() {
        let record = Record::with_side(id("a"), Side::Left, Bytes::from_static(b"x"))
            .submit(Side::Right, Bytes::from_static(b"y"));
        let (left, right) = record.sides().unwrap();
        assert_eq!(left, &Bytes::from_static(b"x"));
        assert_eq!(right, &Bytes::from_static(b"y"));
        assert!(record.result().is_none());
    }

    #[test]
    fn same_side_resubmission_stays_partial() {
        let record = Record::with_side(id("a"), Side::Right, Bytes::from_static(b"x"))
            .submit(Side::Right, Bytes::from_static(b"y"));
        assert!(record.sides().is_none());
        assert_eq!(record.side(Side::Right).unwrap(), &Bytes::from_static(b"y"));
    }

    #[test]
    fn with_result_attaches_to_complete_record() {
        let record = Record::with_side(id("a"), Side::Left, Bytes::from_static(b"x"))
            .submit(Side::Right, Bytes::from_static(b"x"))
            .with_result(equal_result());
        assert_eq!(record.result().unwrap().kind(), ComparisonKind::Equal);
    }

    #[test]
    fn with_result_is_ignored_on_partial_record() {
        let record = Record::with_side(id("a"), Side::Left, Bytes::from_static(b"x"))
            .with_result(equal_result());
        assert!(record.result().is_none());
        assert!(matches!(record.state(), RecordState::Partial { .. }));
    }

    #[test]
    fn submission_clears_cached_result_and_keeps_other_side() {
        let record = Record::with_side(id("a"), Side::Left, Bytes::from_static(b"x"))
            .submit(Side::Right, Bytes::from_static(b"x"))
            .with_result(equal_result())
            .submit(Side::Right, Bytes::from_static(b"zz"));
        assert!(record.result().is_none());
        let (left, right) = record.sides().unwrap();
        assert_eq!(left, &Bytes::from_static(b"x"));
        assert_eq!(right, &Bytes::from_static(b"zz"));
    }

    #[test]
    fn complete_record_never_goes_back_to_partial() {
        let record = Record::with_side(id("a"), Side::Left, Bytes::from_static(b"x"))
            .submit(Side::Right, Bytes::from_static(b"y"))
            .submit(Side::Left, Bytes::from_static(b"z"));
        assert!(record.sides().is_some());
    }
}
