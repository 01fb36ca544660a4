//! RecordStore trait: the abstract interface for record persistence.
//!
//! This trait keeps the engine storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use diffpair_core::{Record, RecordId};

use crate::error::Result;

/// The async interface for record persistence.
///
/// A missing record is a normal outcome, not an error: [`find_by_id`]
/// returns `Ok(None)`. [`save`] upserts by id and returns the persisted
/// record. Neither operation retries; a failure propagates to the caller
/// unchanged.
///
/// [`find_by_id`]: RecordStore::find_by_id
/// [`save`]: RecordStore::save
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Look up a record by id.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>>;

    /// Insert or replace the record stored under its id.
    async fn save(&self, record: &Record) -> Result<Record>;
}
