//! The comparison engine: record lifecycle over an abstract store.
//!
//! Each operation is a single store read followed by at most one
//! conditional write. No locks are held across calls: two concurrent
//! computations for the same id may both persist (last write wins), which
//! is wasteful but never incorrect - each caller gets a result consistent
//! with the record it read. Callers needing strict ordering between a
//! submission and a dependent read must serialize on their side.

use std::sync::Arc;

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use bytes::Bytes;
use tracing::debug;

use diffpair_core::{ComparisonResult, Record, RecordId, Side};
use diffpair_store::RecordStore;

use crate::error::{EngineError, Result};

/// The comparison engine.
///
/// Owns no state of its own; all record state lives behind the
/// [`RecordStore`].
pub struct DifferenceEngine<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> DifferenceEngine<S> {
    /// Create an engine over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit base64-encoded content as the left side of `id`.
    pub async fn submit_left(&self, id: &str, doc: &str) -> Result<Record> {
        self.submit_side(id, doc, Side::Left).await
    }

    /// Submit base64-encoded content as the right side of `id`.
    pub async fn submit_right(&self, id: &str, doc: &str) -> Result<Record> {
        self.submit_side(id, doc, Side::Right).await
    }

    /// Submit base64-encoded content for one side of `id`.
    ///
    /// Creates the record if this is the first submission for the id.
    /// Re-submitting content identical to what the side already holds is a
    /// no-op: the stored record, cached result included, is returned
    /// without a write. Any actual change clears the cached result.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidIdentifier`] for a blank id,
    /// [`EngineError::InvalidEncoding`] for blank or malformed content.
    pub async fn submit_side(&self, id: &str, doc: &str, side: Side) -> Result<Record> {
        debug!(id, %side, "submit request");
        let id = parse_id(id)?;
        let content = decode_content(doc)?;

        if let Some(record) = self.store.find_by_id(&id).await? {
            if record.side(side).is_some_and(|stored| *stored == content) {
                debug!(%id, %side, "content unchanged, skipping write");
                return Ok(record);
            }
            return Ok(self.store.save(&record.submit(side, content)).await?);
        }

        let record = Record::with_side(id, side, content);
        Ok(self.store.save(&record).await?)
    }

    /// Retrieve the record for `id` with its comparison result populated.
    ///
    /// A cached result is returned as-is, with no store write. Otherwise
    /// the result is computed from the two sides, persisted on the record,
    /// and returned.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidIdentifier`] for a blank id;
    /// [`EngineError::NotComparable`] when the record is missing, has only
    /// one side, or has an empty side.
    pub async fn get_difference(&self, id: &str) -> Result<Record> {
        debug!(id, "get difference request");
        let id = parse_id(id)?;

        let record = self
            .store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| EngineError::NotComparable(id.to_string()))?;

        if record.result().is_some() {
            debug!(%id, "serving cached result");
            return Ok(record);
        }

        let (left, right) = record
            .sides()
            .filter(|(left, right)| !left.is_empty() && !right.is_empty())
            .ok_or_else(|| EngineError::NotComparable(id.to_string()))?;

        let result = ComparisonResult::classify(left, right)?;
        debug!(%id, kind = ?result.kind(), "computed comparison result");

        let updated = record.with_result(result);
        Ok(self.store.save(&updated).await?)
    }
}

fn parse_id(id: &str) -> Result<RecordId> {
    RecordId::parse(id).ok_or(EngineError::InvalidIdentifier)
}

/// Standard-alphabet decoder that accepts both padded and unpadded input.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode submitted content, rejecting blank or malformed input.
fn decode_content(doc: &str) -> Result<Bytes> {
    let doc = doc.trim();
    if doc.is_empty() {
        return Err(EngineError::InvalidEncoding);
    }
    match BASE64.decode(doc) {
        Ok(bytes) => Ok(Bytes::from(bytes)),
        Err(err) => {
            debug!(%err, "submitted content is not valid base64");
            Err(EngineError::InvalidEncoding)
        }
    }
}
