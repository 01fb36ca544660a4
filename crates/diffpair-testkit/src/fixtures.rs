//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use diffpair_store::MemoryStore;

use crate::counting::CountingStore;

/// A test fixture with a write-counting in-memory store.
pub struct TestFixture {
    pub store: Arc<CountingStore<MemoryStore>>,
}

impl TestFixture {
    /// Create a new fixture with an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(CountingStore::new(MemoryStore::new())),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Base64-encode plain content for submission.
pub fn encode(content: &[u8]) -> String {
    STANDARD.encode(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_standard_base64() {
        assert_eq!(encode(b"test"), "dGVzdA==");
    }

    #[test]
    fn fixture_starts_with_no_operations() {
        let fixture = TestFixture::new();
        assert_eq!(fixture.store.find_count(), 0);
        assert_eq!(fixture.store.save_count(), 0);
    }
}
