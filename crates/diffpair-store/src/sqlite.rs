//! SQLite implementation of the RecordStore trait.
//!
//! This is the primary storage backend. It uses rusqlite with bundled
//! SQLite behind an internal mutex on the connection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use rusqlite::{params, Connection, OptionalExtension};

use diffpair_core::{ComparisonKind, ComparisonResult, Record, RecordId, RecordState, Side};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::RecordStore;

/// SQLite-based store implementation.
///
/// Thread-safe via an internal Mutex on the connection.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a blocking operation on the connection.
    ///
    /// Runs the closure on the blocking thread pool so the SQLite call
    /// never occupies an async worker thread.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;
            f(&conn)
        })
        .await
        .map_err(|e| {
            StoreError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                Some(format!("spawn_blocking failed: {}", e)),
            ))
        })?
    }
}

/// Raw column values of one record row.
struct RecordRow {
    id: String,
    left: Option<Vec<u8>>,
    right: Option<Vec<u8>>,
    result_kind: Option<i64>,
    result_detail: Option<String>,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RecordRow> {
    Ok(RecordRow {
        id: row.get("id")?,
        left: row.get("left_content")?,
        right: row.get("right_content")?,
        result_kind: row.get("result_kind")?,
        result_detail: row.get("result_detail")?,
    })
}

/// Rebuild a record from raw columns, enforcing the record invariants.
///
/// A row with no sides, or with a result but a missing side, cannot be
/// produced through the store API; finding one means the database was
/// modified out of band, and it surfaces as `InvalidData`.
fn hydrate(row: RecordRow) -> Result<Record> {
    let id = RecordId::parse(&row.id)
        .ok_or_else(|| StoreError::InvalidData("record row has a blank id".to_string()))?;

    let result = match (row.result_kind, row.result_detail) {
        (None, None) => None,
        (Some(kind), Some(detail)) => {
            Some(ComparisonResult::from_parts(kind_from_code(kind)?, detail))
        }
        _ => {
            return Err(StoreError::InvalidData(format!(
                "record {}: result kind and detail must be set together",
                row.id
            )))
        }
    };

    let state = match (row.left, row.right, result) {
        (Some(content), None, None) => RecordState::Partial {
            side: Side::Left,
            content: Bytes::from(content),
        },
        (None, Some(content), None) => RecordState::Partial {
            side: Side::Right,
            content: Bytes::from(content),
        },
        (Some(left), Some(right), None) => RecordState::CompleteNoResult {
            left: Bytes::from(left),
            right: Bytes::from(right),
        },
        (Some(left), Some(right), Some(result)) => RecordState::CompleteWithResult {
            left: Bytes::from(left),
            right: Bytes::from(right),
            result,
        },
        (None, None, _) => {
            return Err(StoreError::InvalidData(format!(
                "record {} has no sides",
                row.id
            )))
        }
        (_, _, Some(_)) => {
            return Err(StoreError::InvalidData(format!(
                "record {} has a result without both sides",
                row.id
            )))
        }
    };

    Ok(Record::from_state(id, state))
}

/// Flatten a record's state into nullable column values.
fn explode(record: &Record) -> (Option<&[u8]>, Option<&[u8]>, Option<(i64, &str)>) {
    match record.state() {
        RecordState::Partial { side, content } => match side {
            Side::Left => (Some(content.as_ref()), None, None),
            Side::Right => (None, Some(content.as_ref()), None),
        },
        RecordState::CompleteNoResult { left, right } => {
            (Some(left.as_ref()), Some(right.as_ref()), None)
        }
        RecordState::CompleteWithResult {
            left,
            right,
            result,
        } => (
            Some(left.as_ref()),
            Some(right.as_ref()),
            Some((kind_code(result.kind()), result.detail())),
        ),
    }
}

fn kind_code(kind: ComparisonKind) -> i64 {
    match kind {
        ComparisonKind::Equal => 0,
        ComparisonKind::SizeMismatch => 1,
        ComparisonKind::ContentMismatch => 2,
    }
}

fn kind_from_code(code: i64) -> Result<ComparisonKind> {
    match code {
        0 => Ok(ComparisonKind::Equal),
        1 => Ok(ComparisonKind::SizeMismatch),
        2 => Ok(ComparisonKind::ContentMismatch),
        _ => Err(StoreError::InvalidData(format!(
            "unknown result kind code: {}",
            code
        ))),
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>> {
        let key = id.clone();
        let row = self
            .with_conn(move |conn| {
                conn.query_row(
                    "SELECT id, left_content, right_content, result_kind, result_detail
                     FROM records WHERE id = ?1",
                    params![key.as_str()],
                    read_row,
                )
                .optional()
                .map_err(StoreError::from)
            })
            .await?;

        match row {
            None => Ok(None),
            Some(row) => match hydrate(row) {
                Ok(record) => Ok(Some(record)),
                Err(err) => {
                    tracing::warn!(id = %id, %err, "rejecting invalid record row");
                    Err(err)
                }
            },
        }
    }

    async fn save(&self, record: &Record) -> Result<Record> {
        let row = record.clone();
        self.with_conn(move |conn| {
            let (left, right, result) = explode(&row);
            let (result_kind, result_detail) = match result {
                Some((kind, detail)) => (Some(kind), Some(detail)),
                None => (None, None),
            };

            conn.execute(
                "INSERT INTO records
                     (id, left_content, right_content, result_kind, result_detail, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                     left_content = excluded.left_content,
                     right_content = excluded.right_content,
                     result_kind = excluded.result_kind,
                     result_detail = excluded.result_detail,
                     updated_at = excluded.updated_at",
                params![
                    row.id().as_str(),
                    left,
                    right,
                    result_kind,
                    result_detail,
                    migration::now_millis(),
                ],
            )?;
            Ok(())
        })
        .await?;

        Ok(record.clone())
    }
}
