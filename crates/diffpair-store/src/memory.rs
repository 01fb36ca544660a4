//! In-memory implementation of the RecordStore trait.
//!
//! Primarily for testing. Same semantics as SQLite but keeps everything in
//! memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use diffpair_core::{Record, RecordId};

use crate::error::Result;
use crate::traits::RecordStore;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, Record>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>> {
        let records = self.records.read().expect("record map lock poisoned");
        Ok(records.get(id).cloned())
    }

    async fn save(&self, record: &Record) -> Result<Record> {
        let mut records = self.records.write().expect("record map lock poisoned");
        records.insert(record.id().clone(), record.clone());
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use diffpair_core::Side;

    fn record(id: &str, content: &'static [u8]) -> Record {
        Record::with_side(
            RecordId::parse(id).unwrap(),
            Side::Left,
            Bytes::from_static(content),
        )
    }

    #[tokio::test]
    async fn find_on_empty_store_is_none() {
        let store = MemoryStore::new();
        let id = RecordId::parse("missing").unwrap();
        assert!(store.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let store = MemoryStore::new();
        let record = record("a", b"content");

        let saved = store.save(&record).await.unwrap();
        assert_eq!(saved, record);

        let found = store.find_by_id(record.id()).await.unwrap().unwrap();
        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn save_replaces_existing_record() {
        let store = MemoryStore::new();
        store.save(&record("a", b"old")).await.unwrap();
        store.save(&record("a", b"new")).await.unwrap();

        let id = RecordId::parse("a").unwrap();
        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.side(Side::Left).unwrap(), &Bytes::from_static(b"new"));
    }
}
