//! # diffpair core
//!
//! Pure primitives for the diffpair comparison service: record identifiers,
//! the record state machine, comparison outcomes, and the offset differ.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over byte buffers.
//!
//! ## Key types
//!
//! - [`Record`] / [`RecordState`] - the stored state for one id, modeled as
//!   an explicit state machine
//! - [`ComparisonResult`] - classification of two complete sides
//! - [`DiffRange`] / [`DiffSummary`] - output of the offset differ
//!
//! ## The offset differ
//!
//! [`diff_offsets`] compares two equal-length buffers position by position
//! and reports maximal runs of differing indices. It is a single linear
//! pass, not an edit-distance diff.

pub mod compare;
pub mod error;
pub mod offsets;
pub mod record;
pub mod types;

pub use compare::{ComparisonKind, ComparisonResult};
pub use error::{CoreError, Result};
pub use offsets::{diff_offsets, DiffRange, DiffSummary};
pub use record::{Record, RecordState};
pub use types::{RecordId, Side};
