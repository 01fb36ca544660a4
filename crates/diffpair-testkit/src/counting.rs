//! A delegating store wrapper that counts operations.
//!
//! Lets tests assert "no write happened" for idempotent submissions and
//! cache hits without a mocking framework.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use diffpair_core::{Record, RecordId};
use diffpair_store::{RecordStore, Result};

/// Wraps any [`RecordStore`] and counts finds and saves.
pub struct CountingStore<S> {
    inner: S,
    finds: AtomicUsize,
    saves: AtomicUsize,
}

impl<S> CountingStore<S> {
    /// Wrap the given store.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            finds: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `find_by_id` calls observed so far.
    pub fn find_count(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    /// Number of `save` calls observed so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: RecordStore> RecordStore for CountingStore<S> {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn save(&self, record: &Record) -> Result<Record> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use diffpair_core::Side;
    use diffpair_store::MemoryStore;

    #[tokio::test]
    async fn counts_finds_and_saves() {
        let store = CountingStore::new(MemoryStore::new());
        let id = RecordId::parse("a").unwrap();
        let record = Record::with_side(id.clone(), Side::Left, Bytes::from_static(b"x"));

        store.find_by_id(&id).await.unwrap();
        store.save(&record).await.unwrap();
        store.save(&record).await.unwrap();

        assert_eq!(store.find_count(), 1);
        assert_eq!(store.save_count(), 2);
    }
}
