//! Study record repository: list, get, insert, update, delete.

use chrono::Utc;
use sl_core::entities::{NewRecord, RawRecord};

use crate::error::DatabaseError;
use crate::helpers::{RECORD_COLUMNS, row_to_raw};
use crate::{PREFIX_RECORD, StudyDb};

impl StudyDb {
    /// All records in insertion order.
    pub async fn list_records(&self) -> Result<Vec<RawRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {RECORD_COLUMNS} FROM study_record ORDER BY rowid"),
                (),
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_raw(&row)?);
        }
        Ok(records)
    }

    /// The record with `id`, if any.
    pub async fn get_record(&self, id: &str) -> Result<Option<RawRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {RECORD_COLUMNS} FROM study_record WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_raw(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a record with a fresh `rec-` id and return the stored row.
    pub async fn insert_record(&self, record: &NewRecord) -> Result<RawRecord, DatabaseError> {
        let id = self.generate_id(PREFIX_RECORD).await?;
        let now = Utc::now().to_rfc3339();

        self.conn()
            .execute(
                r#"INSERT INTO study_record (id, title, "time", created_at, updated_at)
                   VALUES (?1, ?2, ?3, ?4, ?5)"#,
                libsql::params![
                    id.as_str(),
                    record.title.as_str(),
                    record.duration_minutes,
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await?;

        tracing::debug!(%id, "inserted study record");
        self.get_record(&id).await?.ok_or(DatabaseError::NoResult)
    }

    /// Overwrite title and duration of the record with `id`.
    ///
    /// Returns `None` when no record matched.
    pub async fn update_record(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Option<RawRecord>, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let changed = self
            .conn()
            .execute(
                r#"UPDATE study_record SET title = ?1, "time" = ?2, updated_at = ?3 WHERE id = ?4"#,
                libsql::params![
                    record.title.as_str(),
                    record.duration_minutes,
                    now.as_str(),
                    id
                ],
            )
            .await?;

        if changed == 0 {
            tracing::debug!(id, "update matched no study record");
            return Ok(None);
        }
        self.get_record(id).await
    }

    /// Delete the record with `id`. Returns the number of rows removed.
    pub async fn delete_record(&self, id: &str) -> Result<u64, DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM study_record WHERE id = ?1", [id])
            .await?;
        Ok(changed)
    }
}
