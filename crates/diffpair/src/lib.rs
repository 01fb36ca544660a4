//! # diffpair
//!
//! A comparison engine for two independently-arriving binary payloads
//! ("left" and "right") submitted under a shared identifier.
//!
//! ## Overview
//!
//! Callers submit base64-encoded content for either side of a record id,
//! in any order, and later ask for a classification of how the sides
//! differ:
//!
//! - **Equal**: byte-for-byte identical
//! - **SizeMismatch**: different lengths
//! - **ContentMismatch**: same length, with the differing byte ranges
//!   listed as `(index, length)` pairs
//!
//! ## Key concepts
//!
//! - **Record**: the stored state for one id - an explicit state machine
//!   from one submitted side to both sides plus a cached result.
//! - **Idempotent submission**: re-submitting content identical to what a
//!   side already holds performs no write and keeps any cached result.
//! - **Lazy results**: the comparison is computed on first request and
//!   cached until a side's content actually changes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use diffpair::{DifferenceEngine, SqliteStore};
//!
//! async fn example() {
//!     let store = SqliteStore::open("records.db").unwrap();
//!     let engine = DifferenceEngine::new(Arc::new(store));
//!
//!     engine.submit_left("doc-1", "dGVzdA==").await.unwrap();
//!     engine.submit_right("doc-1", "dGVzdA==").await.unwrap();
//!
//!     let record = engine.get_difference("doc-1").await.unwrap();
//!     println!("{:?}", record.result());
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `diffpair::core` - pure primitives (records, outcomes, the differ)
//! - `diffpair::store` - storage abstraction, SQLite and memory backends

pub mod engine;
pub mod error;
pub mod transport;

// Re-export component crates
pub use diffpair_core as core;
pub use diffpair_store as store;

// Re-export main types for convenience
pub use engine::DifferenceEngine;
pub use error::{EngineError, Result};

pub use diffpair_core::{
    diff_offsets, ComparisonKind, ComparisonResult, DiffRange, DiffSummary, Record, RecordId,
    RecordState, Side,
};
pub use diffpair_store::{MemoryStore, RecordStore, SqliteStore, StoreError};
