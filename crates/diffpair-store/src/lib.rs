//! # diffpair store
//!
//! Storage abstraction for the diffpair engine. Provides a trait-based
//! interface for record persistence with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The store module abstracts record persistence behind the [`RecordStore`]
//! trait, keeping the engine storage-agnostic. The primary implementation is
//! [`SqliteStore`], with [`MemoryStore`] for tests and embedding.
//!
//! ## Design notes
//!
//! - **Missing is normal**: `find_by_id` returns `Ok(None)` for an unknown
//!   id, never an error.
//! - **Upsert by id**: `save` inserts or replaces the single row for a
//!   record's id.
//! - **No retries**: store failures propagate to the caller unchanged.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
