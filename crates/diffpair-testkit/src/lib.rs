//! # diffpair testkit
//!
//! Testing utilities for the diffpair engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: helper setup for engine scenarios, including base64
//!   encoding of plain content
//! - **Counting store**: a delegating [`CountingStore`] wrapper that counts
//!   reads and writes, so tests can assert that idempotent submissions and
//!   cache hits perform no store write
//!
//! ## Usage
//!
//! ```rust
//! use diffpair_testkit::{encode, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let doc = encode(b"some payload");
//! assert!(!doc.is_empty());
//! assert_eq!(fixture.store.save_count(), 0);
//! ```

pub mod counting;
pub mod fixtures;

pub use counting::CountingStore;
pub use fixtures::{encode, TestFixture};
