//! Row-to-entity parsing helpers.
//!
//! Timestamps are kept as the stored text. Display normalization happens in
//! `sl_core::normalize`, which understands both RFC 3339 and `SQLite`'s
//! `datetime('now')` format.

use sl_core::entities::RawRecord;

use crate::error::DatabaseError;

/// Column list shared by every record query, in [`row_to_raw`] order.
pub const RECORD_COLUMNS: &str = r#"id, title, "time", created_at, updated_at"#;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Convert a row selected with [`RECORD_COLUMNS`] into a [`RawRecord`].
///
/// # Errors
///
/// Returns `DatabaseError` if a required column is missing or mistyped.
pub fn row_to_raw(row: &libsql::Row) -> Result<RawRecord, DatabaseError> {
    Ok(RawRecord {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        duration_minutes: row.get::<i64>(2)?,
        created_at: get_opt_string(row, 3)?.unwrap_or_default(),
        updated_at: get_opt_string(row, 4)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StudyDb;

    #[tokio::test]
    async fn null_and_empty_strings_read_as_none() {
        let db = StudyDb::open_local(":memory:").await.unwrap();
        let mut rows = db.conn().query("SELECT NULL, '', 'x'", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(get_opt_string(&row, 0).unwrap(), None);
        assert_eq!(get_opt_string(&row, 1).unwrap(), None);
        assert_eq!(get_opt_string(&row, 2).unwrap(), Some("x".into()));
    }

    #[tokio::test]
    async fn row_to_raw_reads_record_columns() {
        let db = StudyDb::open_local(":memory:").await.unwrap();
        db.conn()
            .execute(
                r#"INSERT INTO study_record (id, title, "time", created_at, updated_at)
                   VALUES ('rec-00000001', 'Rust', 45, '2024-05-01 03:04:05', '')"#,
                (),
            )
            .await
            .unwrap();
        let mut rows = db
            .conn()
            .query(&format!("SELECT {RECORD_COLUMNS} FROM study_record"), ())
            .await
            .unwrap();
        let raw = row_to_raw(&rows.next().await.unwrap().unwrap()).unwrap();
        assert_eq!(raw.id, "rec-00000001");
        assert_eq!(raw.title, "Rust");
        assert_eq!(raw.duration_minutes, 45);
        assert_eq!(raw.created_at, "2024-05-01 03:04:05");
        assert_eq!(raw.updated_at, "");
    }
}
