//! # sl-db
//!
//! libSQL storage for Studylog records.
//!
//! A single `study_record` table holds every record. The database can be a
//! local file, `:memory:` for tests, or a remote libSQL server. Either way
//! [`StudyDb`] implements [`sl_core::backend::RecordBackend`], so the record
//! service does not care where rows live.

mod backend;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// ID prefix for study records (`rec-a3f8b2c1`).
pub const PREFIX_RECORD: &str = "rec";

/// Central database handle for study record storage.
pub struct StudyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl StudyDb {
    /// Open a local database at the given path.
    ///
    /// Creates the parent directory if missing. Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != ":memory:" {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        DatabaseError::Other(anyhow::anyhow!(
                            "failed to create {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let study_db = Self { db, conn };
        study_db.run_migrations().await?;
        tracing::debug!(path, "opened local study database");
        Ok(study_db)
    }

    /// Open a remote libSQL database (e.g., Turso).
    ///
    /// Every query goes over the network. Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        let study_db = Self { db, conn };
        study_db.run_migrations().await?;
        tracing::debug!(url, "opened remote study database");
        Ok(study_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rec-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
